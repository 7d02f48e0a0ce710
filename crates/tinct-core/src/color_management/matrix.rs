//! 3x3 matrix transforms between linear sRGB and CIE XYZ (D65).

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

/// Linear sRGB to XYZ, D65 white point.
pub const LINEAR_SRGB_TO_XYZ: ColorMatrix = ColorMatrix([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// XYZ to linear sRGB, D65 white point.
pub const XYZ_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

impl ColorMatrix {
    /// Apply this matrix to a column vector.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: ColorMatrix = ColorMatrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Compute `a × b` column by column through `apply`.
    fn product(a: &ColorMatrix, b: &ColorMatrix) -> ColorMatrix {
        let mut out = [[0.0; 3]; 3];
        for j in 0..3 {
            let col = a.apply([b.0[0][j], b.0[1][j], b.0[2][j]]);
            for i in 0..3 {
                out[i][j] = col[i];
            }
        }
        ColorMatrix(out)
    }

    #[test]
    fn test_identity_is_noop() {
        let v = [0.25, 0.5, 0.75];
        assert_eq!(IDENTITY.apply(v), v);
    }

    #[test]
    fn test_forward_and_inverse_are_near_inverse() {
        // The published coefficients are rounded to four places.
        let m = product(&XYZ_TO_LINEAR_SRGB, &LINEAR_SRGB_TO_XYZ);
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (m.0[i][j] - IDENTITY.0[i][j]).abs() < 1e-3,
                    "entry [{i}][{j}] = {}",
                    m.0[i][j]
                );
            }
        }
    }

    #[test]
    fn test_white_rows_sum_to_d65() {
        let white = LINEAR_SRGB_TO_XYZ.apply([1.0, 1.0, 1.0]);
        assert!((white[0] - 0.9505).abs() < 1e-9);
        assert!((white[1] - 1.0).abs() < 1e-9);
        assert!((white[2] - 1.089).abs() < 1e-9);
    }
}
