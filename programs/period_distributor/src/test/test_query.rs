#[cfg(test)]
mod tests {
    use crate::error::PeriodDistributorError;
    use crate::instructions::range_len;

    #[test]
    fn test_range_is_inclusive() {
        // [10, 11] covers two periods; [n, n] covers one
        assert_eq!(range_len(10, 11).unwrap(), 2);
        assert_eq!(range_len(7, 7).unwrap(), 1);
        assert_eq!(range_len(0, 9).unwrap(), 10);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = range_len(11, 10).unwrap_err();
        assert_eq!(err, PeriodDistributorError::InvalidPeriodRange.into());

        let err = range_len(u64::MAX, 0).unwrap_err();
        assert_eq!(err, PeriodDistributorError::InvalidPeriodRange.into());
    }

    #[test]
    fn test_full_domain_range_overflows() {
        // span + 1 does not fit in u64 when the range covers every period
        let err = range_len(0, u64::MAX).unwrap_err();
        assert_eq!(err, PeriodDistributorError::ArithmeticOverflow.into());

        // One short of full domain is the largest representable length
        assert_eq!(range_len(1, u64::MAX).unwrap(), u64::MAX);
        assert_eq!(range_len(0, u64::MAX - 1).unwrap(), u64::MAX);
    }
}
