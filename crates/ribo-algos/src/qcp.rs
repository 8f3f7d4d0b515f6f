//! Quaternion characteristic polynomial (QCP) rotation fitting
//!
//! Finds the proper rotation `R` minimising `Σ ||R·mobile_i − target_i||²`
//! for two index-corresponded point sets (Theobald 2005; Liu, Agrafiotis &
//! Theobald 2010). The largest eigenvalue of Horn's 4×4 key matrix is found
//! by Newton iteration on its characteristic polynomial, and the matching
//! eigenvector (the optimal quaternion) is read off the adjoint of
//! `K − λI`.
//!
//! The points are NOT centered here: the fit is a pure rotation about the
//! origin. Center both sets beforehand for a full rigid-body fit.
//!
//! The inner product is divided by the mean squared radius of the two sets
//! before solving, so the eigenvector thresholds hold at any coordinate
//! scale; the eigenvalue and RMSD are scaled back afterwards.

use crate::linalg::{from_axes, point, Point3, RotationMatrix};
use crate::{AlignError, AlignResult};

const EVAL_PRECISION: f64 = 1e-11;
const EVEC_PRECISION: f64 = 1e-6;
const MAX_NEWTON_ITERATIONS: usize = 50;
const COLLINEAR_TOLERANCE: f64 = 1e-8;

/// Result of a QCP fit
#[derive(Debug, Clone, PartialEq)]
pub struct QcpFit {
    /// Row-major rotation taking mobile points onto target points
    pub rotation: RotationMatrix,
    /// RMSD after applying `rotation`
    pub rmsd: f64,
    /// Number of point pairs used
    pub n_points: usize,
}

/// Fit the rotation superposing `mobile` onto `target`.
///
/// Both slices must have the same length and contain at least three
/// non-collinear points.
pub fn fit(mobile: &[Point3], target: &[Point3]) -> AlignResult<QcpFit> {
    let n = mobile.len();
    if n != target.len() {
        return Err(AlignError::LengthMismatch {
            what: "mobile vs target",
            left: n,
            right: target.len(),
        });
    }
    if n < 3 || is_collinear(mobile) || is_collinear(target) {
        return Err(AlignError::DegenerateInput(n));
    }

    let (mut a, e0) = inner_product(mobile, target);
    let radius_sq = e0 / n as f64;
    if !(radius_sq.is_finite() && radius_sq > 0.0) {
        return Err(AlignError::DegenerateInput(n));
    }
    a.iter_mut().for_each(|v| *v /= radius_sq);
    let e0 = e0 / radius_sq;

    let (rotation, lambda) =
        rotation_from_inner_product(&a, e0).ok_or(AlignError::DegenerateInput(n))?;
    let rmsd = (2.0 * (e0 - lambda) / n as f64).abs().sqrt() * radius_sq.sqrt();

    Ok(QcpFit {
        rotation,
        rmsd,
        n_points: n,
    })
}

/// [`fit`] over parallel axis arrays
pub fn fit_axes(
    mobile_x: &[f64],
    mobile_y: &[f64],
    mobile_z: &[f64],
    target_x: &[f64],
    target_y: &[f64],
    target_z: &[f64],
) -> AlignResult<QcpFit> {
    let mobile = from_axes(mobile_x, mobile_y, mobile_z)?;
    let target = from_axes(target_x, target_y, target_z)?;
    fit(&mobile, &target)
}

/// True if all points lie (within tolerance) on a single line
fn is_collinear(points: &[Point3]) -> bool {
    let origin = points[0];
    let (far, span) = points
        .iter()
        .map(|&p| (p, (p - origin).magnitude()))
        .fold((origin, 0.0f64), |best, cur| if cur.1 > best.1 { cur } else { best });

    let scale = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()).max(p.z.abs()))
        .fold(1.0f64, f64::max);
    if span <= COLLINEAR_TOLERANCE * scale {
        return true;
    }

    let axis = far - origin;
    points.iter().all(|&p| {
        let d = p - origin;
        let cross = point(
            axis.y * d.z - axis.z * d.y,
            axis.z * d.x - axis.x * d.z,
            axis.x * d.y - axis.y * d.x,
        );
        let off_axis = cross.magnitude() / span;
        off_axis <= COLLINEAR_TOLERANCE * scale
    })
}

/// Cross inner product `A[i][j] = Σ target_i · mobile_j` (row-major) and
/// `E0 = (Σ|target|² + Σ|mobile|²) / 2`.
fn inner_product(mobile: &[Point3], target: &[Point3]) -> ([f64; 9], f64) {
    let mut a = [0.0f64; 9];
    let mut g_target = 0.0;
    let mut g_mobile = 0.0;

    for (m, t) in mobile.iter().zip(target) {
        g_target += t.x * t.x + t.y * t.y + t.z * t.z;
        g_mobile += m.x * m.x + m.y * m.y + m.z * m.z;

        a[0] += t.x * m.x;
        a[1] += t.x * m.y;
        a[2] += t.x * m.z;
        a[3] += t.y * m.x;
        a[4] += t.y * m.y;
        a[5] += t.y * m.z;
        a[6] += t.z * m.x;
        a[7] += t.z * m.y;
        a[8] += t.z * m.z;
    }

    (a, (g_target + g_mobile) * 0.5)
}

/// Solve for the optimal rotation and the largest key-matrix eigenvalue.
///
/// `None` when every adjoint column vanishes and no eigenvector can be read
/// off.
fn rotation_from_inner_product(a: &[f64; 9], e0: f64) -> Option<(RotationMatrix, f64)> {
    let [sxx, sxy, sxz, syx, syy, syz, szx, szy, szz] = *a;

    let sxx2 = sxx * sxx;
    let syy2 = syy * syy;
    let szz2 = szz * szz;
    let sxy2 = sxy * sxy;
    let syz2 = syz * syz;
    let sxz2 = sxz * sxz;
    let syx2 = syx * syx;
    let szy2 = szy * szy;
    let szx2 = szx * szx;

    let syz_szy_minus_syy_szz2 = 2.0 * (syz * szy - syy * szz);
    let sxx2_syy2_szz2_syz2_szy2 = syy2 + szz2 - sxx2 + syz2 + szy2;

    let c2 = -2.0 * (sxx2 + syy2 + szz2 + sxy2 + syx2 + sxz2 + szx2 + syz2 + szy2);
    let c1 = 8.0
        * (sxx * syz * szy + syy * szx * sxz + szz * sxy * syx
            - sxx * syy * szz
            - syz * szx * sxy
            - szy * syx * sxz);

    let sxz_p_szx = sxz + szx;
    let syz_p_szy = syz + szy;
    let sxy_p_syx = sxy + syx;
    let syz_m_szy = syz - szy;
    let sxz_m_szx = sxz - szx;
    let sxy_m_syx = sxy - syx;
    let sxx_p_syy = sxx + syy;
    let sxx_m_syy = sxx - syy;
    let sxy2_sxz2_syx2_szx2 = sxy2 + sxz2 - syx2 - szx2;

    let c0 = sxy2_sxz2_syx2_szx2 * sxy2_sxz2_syx2_szx2
        + (sxx2_syy2_szz2_syz2_szy2 + syz_szy_minus_syy_szz2)
            * (sxx2_syy2_szz2_syz2_szy2 - syz_szy_minus_syy_szz2)
        + (-sxz_p_szx * syz_m_szy + sxy_m_syx * (sxx_m_syy - szz))
            * (-sxz_m_szx * syz_p_szy + sxy_m_syx * (sxx_m_syy + szz))
        + (-sxz_p_szx * syz_p_szy - sxy_p_syx * (sxx_p_syy - szz))
            * (-sxz_m_szx * syz_m_szy - sxy_p_syx * (sxx_p_syy + szz))
        + (sxy_p_syx * syz_p_szy + sxz_p_szx * (sxx_m_syy + szz))
            * (-sxy_m_syx * syz_m_szy + sxz_p_szx * (sxx_p_syy + szz))
        + (sxy_p_syx * syz_m_szy + sxz_m_szx * (sxx_m_syy - szz))
            * (-sxy_m_syx * syz_p_szy + sxz_m_szx * (sxx_p_syy - szz));

    // Newton descent from E0, an upper bound on the largest eigenvalue
    let mut lambda = e0;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let previous = lambda;
        let x2 = lambda * lambda;
        let b = (x2 + c2) * lambda;
        let a = b + c1;
        let derivative = 2.0 * x2 * lambda + b + a;
        if derivative == 0.0 {
            break;
        }
        let delta = (a * lambda + c0) / derivative;
        lambda -= delta;
        if (lambda - previous).abs() < (EVAL_PRECISION * lambda).abs() {
            break;
        }
    }

    // K − λI
    let a11 = sxx_p_syy + szz - lambda;
    let a12 = syz_m_szy;
    let a13 = -sxz_m_szx;
    let a14 = sxy_m_syx;
    let a21 = syz_m_szy;
    let a22 = sxx_m_syy - szz - lambda;
    let a23 = sxy_p_syx;
    let a24 = sxz_p_szx;
    let a31 = a13;
    let a32 = a23;
    let a33 = syy - sxx - szz - lambda;
    let a34 = syz_p_szy;
    let a41 = a14;
    let a42 = a24;
    let a43 = a34;
    let a44 = szz - sxx_p_syy - lambda;

    let a3344_4334 = a33 * a44 - a43 * a34;
    let a3244_4234 = a32 * a44 - a42 * a34;
    let a3243_4233 = a32 * a43 - a42 * a33;
    let a3143_4133 = a31 * a43 - a41 * a33;
    let a3144_4134 = a31 * a44 - a41 * a34;
    let a3142_4132 = a31 * a42 - a41 * a32;

    // Any non-vanishing column of the adjoint is the eigenvector; try the
    // columns in turn until one is long enough to normalise.
    let mut q = [
        a22 * a3344_4334 - a23 * a3244_4234 + a24 * a3243_4233,
        -a21 * a3344_4334 + a23 * a3144_4134 - a24 * a3143_4133,
        a21 * a3244_4234 - a22 * a3144_4134 + a24 * a3142_4132,
        -a21 * a3243_4233 + a22 * a3143_4133 - a23 * a3142_4132,
    ];

    if norm_sq(&q) < EVEC_PRECISION {
        q = [
            a12 * a3344_4334 - a13 * a3244_4234 + a14 * a3243_4233,
            -a11 * a3344_4334 + a13 * a3144_4134 - a14 * a3143_4133,
            a11 * a3244_4234 - a12 * a3144_4134 + a14 * a3142_4132,
            -a11 * a3243_4233 + a12 * a3143_4133 - a13 * a3142_4132,
        ];
    }

    if norm_sq(&q) < EVEC_PRECISION {
        let a1324_1423 = a13 * a24 - a14 * a23;
        let a1224_1422 = a12 * a24 - a14 * a22;
        let a1223_1322 = a12 * a23 - a13 * a22;
        let a1124_1421 = a11 * a24 - a14 * a21;
        let a1123_1321 = a11 * a23 - a13 * a21;
        let a1122_1221 = a11 * a22 - a12 * a21;

        q = [
            a42 * a1324_1423 - a43 * a1224_1422 + a44 * a1223_1322,
            -a41 * a1324_1423 + a43 * a1124_1421 - a44 * a1123_1321,
            a41 * a1224_1422 - a42 * a1124_1421 + a44 * a1122_1221,
            -a41 * a1223_1322 + a42 * a1123_1321 - a43 * a1122_1221,
        ];

        if norm_sq(&q) < EVEC_PRECISION {
            q = [
                a32 * a1324_1423 - a33 * a1224_1422 + a34 * a1223_1322,
                -a31 * a1324_1423 + a33 * a1124_1421 - a34 * a1123_1321,
                a31 * a1224_1422 - a32 * a1124_1421 + a34 * a1122_1221,
                -a31 * a1223_1322 + a32 * a1123_1321 - a33 * a1122_1221,
            ];

            if norm_sq(&q) < EVEC_PRECISION {
                return None;
            }
        }
    }

    let norm = norm_sq(&q).sqrt();
    let [q1, q2, q3, q4] = q.map(|c| c / norm);

    let a2 = q1 * q1;
    let x2 = q2 * q2;
    let y2 = q3 * q3;
    let z2 = q4 * q4;
    let xy = q2 * q3;
    let az = q1 * q4;
    let zx = q4 * q2;
    let ay = q1 * q3;
    let yz = q3 * q4;
    let ax = q1 * q2;

    let rotation = [
        a2 + x2 - y2 - z2,
        2.0 * (xy + az),
        2.0 * (zx - ay),
        2.0 * (xy - az),
        a2 - x2 + y2 - z2,
        2.0 * (yz + ax),
        2.0 * (zx + ay),
        2.0 * (yz - ax),
        a2 - x2 - y2 + z2,
    ];

    Some((rotation, lambda))
}

#[inline]
fn norm_sq(q: &[f64; 4]) -> f64 {
    q.iter().map(|c| c * c).sum()
}
