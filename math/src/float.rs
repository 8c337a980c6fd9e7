pub trait Float: Sized {
    /// Returns the absolute difference between `self` and `other`.
    fn dist_to(self, other: Self) -> Self;
    /// Clamps `self` into [-1, 1], keeping NaN as is. Useful before `acos` or `asin`.
    fn clamp_cos(self) -> Self;
}

impl Float for f32 {
    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.5f32.dist_to(-0.5), 2.0);
    /// ```
    fn dist_to(self, other: f32) -> f32 {
        (self - other).abs()
    }

    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.0000001f32.clamp_cos(), 1.0);
    /// assert_eq!((-3.0f32).clamp_cos(), -1.0);
    /// assert!(f32::NAN.clamp_cos().is_nan());
    /// ```
    fn clamp_cos(self) -> f32 {
        if self > 1.0 {
            1.0
        } else if self < -1.0 {
            -1.0
        } else {
            self
        }
    }
}

#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr) => {
        if $left >= $right {
            panic!(
                "Assertion failed: {} < {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_gt {
    ($left:expr, $right:expr) => {
        if $left <= $right {
            panic!(
                "Assertion failed: {} > {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
