// src/math/utils.rs

/// Numerische Konstanten
pub mod constants {
    /// Nachkommastellen, auf die Polygon-Ausgaben gerundet werden.
    pub const DEFAULT_OUTPUT_PRECISION: u32 = 3;
    /// Oberhalb davon bringt Runden bei f64 nichts mehr.
    pub const MAX_OUTPUT_PRECISION: u32 = 15;
}

/// Interpolation und Rundung
pub mod comparison {
    /// Lineare Interpolation.
    ///
    /// Falls `b - a` nicht darstellbar ist, wird mit den gewichteten
    /// Endpunkten gerechnet; für `t` in `[0, 1]` bleibt das Ergebnis endlich.
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        let delta = b - a;
        if delta.is_finite() {
            a + delta * t
        } else {
            a * (1.0 - t) + b * t
        }
    }

    /// `b - a` halbiert; läuft für endliche Eingaben nie über.
    pub fn half_difference(a: f64, b: f64) -> f64 {
        b / 2.0 - a / 2.0
    }

    /// Rounds `value` to `decimals` fractional digits, half away from zero.
    ///
    /// A result of negative zero is returned as `0.0`.
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let rounded = (value * factor).round() / factor;
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}

/// Schnittpunkt-Hilfen für achsenparallele Randgeraden.
///
/// Both clippers solve the crossing of a segment with a vertical or
/// horizontal boundary line by interpolating along the clipped axis. A zero
/// delta on that axis never reaches the division. When an intermediate
/// difference or product overflows, the crossing is interpolated through the
/// line parameter `t` computed from halved differences instead.
pub mod crossing {
    use super::comparison::{half_difference, lerp};

    /// `y` of the line through `(x1, y1)`, `(x2, y2)` at `x = boundary_x`.
    ///
    /// Returns `y1` for a vertical line.
    pub fn y_at_x(x1: f64, y1: f64, x2: f64, y2: f64, boundary_x: f64) -> f64 {
        along(x1, y1, x2, y2, boundary_x)
    }

    /// `x` of the line through `(x1, y1)`, `(x2, y2)` at `y = boundary_y`.
    ///
    /// Returns `x1` for a horizontal line.
    pub fn x_at_y(x1: f64, y1: f64, x2: f64, y2: f64, boundary_y: f64) -> f64 {
        along(y1, x1, y2, x2, boundary_y)
    }

    /// Wert der abhängigen Koordinate `v` an der Stelle `u = boundary`.
    fn along(u1: f64, v1: f64, u2: f64, v2: f64, boundary: f64) -> f64 {
        if u2 == u1 {
            return v1;
        }
        let du = u2 - u1;
        let direct = v1 + (v2 - v1) * (boundary - u1) / du;
        if du.is_finite() && direct.is_finite() {
            return direct;
        }
        let t = half_difference(u1, boundary) / half_difference(u1, u2);
        lerp(v1, v2, t)
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;
    use super::crossing::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_three_decimals() {
        assert_eq!(round_to(-16.666_666_666, 3), -16.667);
        assert_eq!(round_to(22.000_000_000_1, 3), 22.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.23456, 0), 1.0);
    }

    #[test]
    fn test_round_to_normalises_negative_zero() {
        let r = round_to(-0.0004, 3);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_crossing_interpolates() {
        assert_relative_eq!(
            y_at_x(-10.0, 20.0, 50.0, -30.0, 40.0),
            -21.666_666_666_666_664,
            epsilon = 1e-9
        );
        assert_relative_eq!(x_at_y(0.0, 0.0, 10.0, 20.0, 5.0), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_crossing_guards_zero_delta() {
        // vertikale Linie: kein Schnitt mit x = const berechenbar
        assert_eq!(y_at_x(3.0, 1.0, 3.0, 9.0, 0.0), 1.0);
        // horizontale Linie
        assert_eq!(x_at_y(-4.0, 2.0, 8.0, 2.0, 10.0), -4.0);
    }

    #[test]
    fn test_crossing_survives_overflowing_deltas() {
        // y = x über fast den gesamten f64-Bereich
        for extent in [1e200, 1e308, f64::MAX] {
            let x = x_at_y(-extent, -extent, extent, extent, 40.0);
            let y = y_at_x(-extent, -extent, extent, extent, -40.0);
            assert!(x.is_finite() && y.is_finite(), "extent {extent}");
            assert!(x.abs() <= extent && y.abs() <= extent);
        }
        // Produkt läuft über, Differenzen nicht
        assert_relative_eq!(
            x_at_y(-1e200, -1e200, 1e200, 1e200, 0.0),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_lerp_stays_finite_for_huge_spans() {
        assert_eq!(lerp(-10.0, 30.0, 0.25), 0.0);
        let mid = lerp(-f64::MAX, f64::MAX, 0.5);
        assert!(mid.is_finite());
        assert_eq!(mid, 0.0);
        assert_eq!(half_difference(-f64::MAX, f64::MAX), f64::MAX);
    }
}
