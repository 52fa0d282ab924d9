//! 一位小数的四舍五入

/// 保留一位小数，0.5 向上进位（负数同样向正无穷方向进位）
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_basic() {
        assert_eq!(round1(83.333), 83.3);
        assert_eq!(round1(25.0), 25.0);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(99.99), 100.0);
    }

    #[test]
    fn test_round1_half_up() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(12.25), 12.3);
        assert_eq!(round1(-0.25), -0.2);
    }

    #[test]
    fn test_round1_two_thirds() {
        assert_eq!(round1(200.0 / 3.0), 66.7);
        assert_eq!(round1(100.0 / 3.0), 33.3);
    }
}
