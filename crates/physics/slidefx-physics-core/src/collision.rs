//! Box-versus-box contact resolution.

use kurbo::Vec2;

use crate::body::Body;

/// Separate two overlapping bodies and reflect their approach velocity.
///
/// Penetration is corrected along the axis of least overlap, split by
/// inverse mass. Restitution is the larger of the two bodies'. Returns
/// true when the bodies were in contact.
pub(crate) fn resolve_contact(a: &mut Body, b: &mut Body) -> bool {
    if !a.collides() || !b.collides() {
        return false;
    }
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_total = inv_a + inv_b;
    if inv_total <= 0.0 {
        return false;
    }

    let ra = a.aabb();
    let rb = b.aabb();
    let overlap_x = ra.x1.min(rb.x1) - ra.x0.max(rb.x0);
    let overlap_y = ra.y1.min(rb.y1) - ra.y0.max(rb.y0);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return false;
    }

    let delta = rb.center() - ra.center();
    let (normal, depth) = if overlap_x < overlap_y {
        (Vec2::new(delta.x.signum(), 0.0), overlap_x)
    } else {
        (Vec2::new(0.0, delta.y.signum()), overlap_y)
    };

    *a.center_mut() -= normal * (depth * inv_a / inv_total);
    *b.center_mut() += normal * (depth * inv_b / inv_total);

    let approach = (*b.velocity_mut() - *a.velocity_mut()).dot(normal);
    if approach < 0.0 {
        let restitution = a.restitution().max(b.restitution());
        let impulse = -(1.0 + restitution) * approach / inv_total;
        *a.velocity_mut() -= normal * (impulse * inv_a);
        *b.velocity_mut() += normal * (impulse * inv_b);
    }
    true
}
