// ss-core/src/units.rs

use uom::si::f64::{Frequency as UomFrequency, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Frequency = UomFrequency;
pub type Time = UomTime;

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn to_seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

#[inline]
pub fn to_hertz(f: Frequency) -> f64 {
    use uom::si::frequency::hertz;
    f.get::<hertz>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let dt = s(0.1);
        assert!((to_seconds(dt) - 0.1).abs() < 1e-15);
        let f = hz(50.0);
        assert!((to_hertz(f) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn millisecond_time_converts_to_seconds() {
        use uom::si::time::millisecond;
        let dt = Time::new::<millisecond>(20.0);
        assert!((to_seconds(dt) - 0.02).abs() < 1e-15);
    }
}
