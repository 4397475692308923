/// Host layout constraint for one axis, mirroring classic view-toolkit
/// measure specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// No constraint; the graph falls back to its configured base size.
    Unspecified,
    /// The host dictates this exact size.
    Exactly(u32),
    /// The host allows up to this size.
    AtMost(u32),
}

impl MeasureSpec {
    /// Default-size resolution: any explicit constraint wins over the
    /// fallback, `AtMost` included.
    #[must_use]
    pub fn resolve(self, fallback: u32) -> u32 {
        match self {
            Self::Unspecified => fallback,
            Self::Exactly(size) | Self::AtMost(size) => size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MeasureSpec;

    #[test]
    fn unspecified_falls_back() {
        assert_eq!(MeasureSpec::Unspecified.resolve(200), 200);
    }

    #[test]
    fn explicit_constraints_win() {
        assert_eq!(MeasureSpec::Exactly(640).resolve(200), 640);
        assert_eq!(MeasureSpec::AtMost(120).resolve(200), 120);
    }
}
