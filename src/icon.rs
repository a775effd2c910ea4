// Draw the PortList network badge: blue disc, white hub, six spoke nodes
// joined by a thin outer ring of links.

pub struct IconData {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Canvas edge length the fixed pixel metrics below are defined against.
pub const BASE_SIZE: u32 = 512;
pub const NODE_COUNT: usize = 6;

// Metrics in pixels at BASE_SIZE; scaled linearly for other canvas sizes.
const BADGE_MARGIN: f32 = 50.0;
const HUB_RADIUS: f32 = 30.0;
const NODE_RADIUS: f32 = 20.0;
const RING_RADIUS: f32 = 150.0;
const SPOKE_WIDTH: f32 = 6.0;
const LINK_WIDTH: f32 = 2.0;

const PRIMARY: [u8; 4] = [70, 130, 255, 255];
const SECONDARY: [u8; 4] = [255, 255, 255, 255];
const ACCENT: [u8; 4] = [255, 140, 0, 255];
const LINK: [u8; 4] = [255, 255, 255, 128];

/// Center of outer node `i`, screen coordinates (y grows downward).
pub fn node_center(size: u32, i: usize) -> (f32, f32) {
    let scale = size as f32 / BASE_SIZE as f32;
    let c = size as f32 * 0.5;
    let angle = (i as f32 * 60.0).to_radians();
    (
        c + RING_RADIUS * scale * angle.cos(),
        c + RING_RADIUS * scale * angle.sin(),
    )
}

/// Node fill alternates by index parity; even nodes get the accent color.
pub fn node_fill(i: usize) -> [u8; 4] {
    if i % 2 == 0 { ACCENT } else { SECONDARY }
}

pub fn generate_icon(size: u32) -> IconData {
    let w = size;
    let h = size;
    let mut rgba = vec![0u8; (w * h * 4) as usize];
    let scale = size as f32 / BASE_SIZE as f32;
    let c = size as f32 * 0.5;
    let badge_radius = c - BADGE_MARGIN * scale;
    let nodes: Vec<(f32, f32)> = (0..NODE_COUNT).map(|i| node_center(size, i)).collect();

    for y in 0..h {
        for x in 0..w {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let center_dist = dist(px, py, c, c);
            // Everything sits on the badge disc; outside it stays transparent.
            if center_dist > badge_radius {
                continue;
            }
            let mut color = PRIMARY;
            for n in &nodes {
                if segment_dist(px, py, (c, c), *n) <= SPOKE_WIDTH * scale * 0.5 {
                    color = SECONDARY;
                    break;
                }
            }
            for i in 0..NODE_COUNT {
                let a = nodes[i];
                let b = nodes[(i + 1) % NODE_COUNT];
                if segment_dist(px, py, a, b) <= LINK_WIDTH * scale * 0.5 {
                    color = over(LINK, color);
                    break;
                }
            }
            if center_dist <= HUB_RADIUS * scale {
                color = SECONDARY;
            }
            // Nodes last so their fill is never obscured by spokes or links.
            for (i, n) in nodes.iter().enumerate() {
                if dist(px, py, n.0, n.1) <= NODE_RADIUS * scale {
                    color = node_fill(i);
                    break;
                }
            }
            let idx = ((y * w + x) * 4) as usize;
            rgba[idx..idx + 4].copy_from_slice(&color);
        }
    }

    IconData { rgba, width: w, height: h }
}

#[inline]
fn dist(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

// Distance from (px, py) to the segment a..b.
fn segment_dist(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let dx = bx - ax;
    let dy = by - ay;
    let len2 = dx * dx + dy * dy;
    if len2 <= f32::EPSILON {
        return dist(px, py, ax, ay);
    }
    let t = (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0);
    dist(px, py, ax + t * dx, ay + t * dy)
}

// Source-over composite of src onto dst.
#[inline]
fn over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let a = src[3] as f32 / 255.0;
    [
        (src[0] as f32 * a + dst[0] as f32 * (1.0 - a)) as u8,
        (src[1] as f32 * a + dst[1] as f32 * (1.0 - a)) as u8,
        (src[2] as f32 * a + dst[2] as f32 * (1.0 - a)) as u8,
        (src[3] as f32 + dst[3] as f32 * (1.0 - a)).min(255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(icon: &IconData, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * icon.width + x) * 4) as usize;
        [
            icon.rgba[idx],
            icon.rgba[idx + 1],
            icon.rgba[idx + 2],
            icon.rgba[idx + 3],
        ]
    }

    #[test]
    fn nodes_sit_on_ring_at_sixty_degree_steps() {
        let c = BASE_SIZE as f32 * 0.5;
        for i in 0..NODE_COUNT {
            let (x, y) = node_center(BASE_SIZE, i);
            let d = dist(x, y, c, c);
            assert!((d - RING_RADIUS).abs() < 1e-3, "node {} at distance {}", i, d);
            let angle = (y - c).atan2(x - c).to_degrees().rem_euclid(360.0);
            let expected = (i as f32 * 60.0).rem_euclid(360.0);
            assert!((angle - expected).abs() < 1e-3, "node {} at angle {}", i, angle);
        }
    }

    #[test]
    fn node_fill_alternates_by_parity() {
        for i in 0..NODE_COUNT {
            let expected = if i % 2 == 0 { ACCENT } else { SECONDARY };
            assert_eq!(node_fill(i), expected);
        }
    }

    #[test]
    fn corners_and_border_stay_transparent() {
        let icon = generate_icon(BASE_SIZE);
        for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
            assert_eq!(pixel(&icon, x, y)[3], 0);
        }
        // Just outside the badge disc on the x axis: margin is 50 px.
        assert_eq!(pixel(&icon, 490, 256)[3], 0);
    }

    #[test]
    fn hub_and_node_pixels_have_expected_fills() {
        let icon = generate_icon(BASE_SIZE);
        assert_eq!(pixel(&icon, 256, 256), SECONDARY);
        for i in 0..NODE_COUNT {
            let (x, y) = node_center(BASE_SIZE, i);
            let got = pixel(&icon, x as u32, y as u32);
            assert_eq!(got, node_fill(i), "node {}", i);
        }
    }

    #[test]
    fn badge_interior_away_from_shapes_is_primary() {
        let icon = generate_icon(BASE_SIZE);
        // 190 px out at 30 degrees: inside the badge, clear of the hub,
        // spokes, links, and every node disc.
        let c = 256.0_f32;
        let x = (c + 190.0 * 30.0_f32.to_radians().cos()) as u32;
        let y = (c + 190.0 * 30.0_f32.to_radians().sin()) as u32;
        assert_eq!(pixel(&icon, x, y), PRIMARY);
    }

    #[test]
    fn scaled_canvas_keeps_proportions() {
        let icon = generate_icon(256);
        assert_eq!((icon.width, icon.height), (256, 256));
        assert_eq!(icon.rgba.len(), 256 * 256 * 4);
        // Hub still white at the center of the smaller canvas.
        assert_eq!(pixel(&icon, 128, 128), SECONDARY);
        let (x, y) = node_center(256, 0);
        assert_eq!(dist(x, y, 128.0, 128.0), 75.0);
    }
}
