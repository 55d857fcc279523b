// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Char-cell shape plotting.
//!
//! line implements Bresenham lines with | - \ / symbols, used by the
//! terminal adapter to approximate line strips. circle implements the
//! midpoint circle used for control point markers.

/// Bresenham line from (x0, y0) to (x1, y1). Each step carries the char
/// that best matches the local direction of travel.
pub fn line(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<(i16, i16, char)> {
    let mut res: Vec<(i16, i16, char)> = Vec::new();

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = if dx > dy { dx } else { -dy } / 2;
    let mut err2: i16;

    let mut x = x0;
    let mut y = y0;

    // 0: start cell, 1: stepped x, 2: stepped y, 3: stepped both
    let mut flag: u8 = 0;

    loop {
        let sym = match flag {
            1 => '-',
            2 => '|',
            3 => {
                // screen rows grow downward, so equal signs means backslash
                if (sx > 0 && sy > 0) || (sx < 0 && sy < 0) {
                    '\\'
                } else {
                    '/'
                }
            }
            _ => '+',
        };
        res.push((x, y, sym));

        if x == x1 && y == y1 {
            break;
        }

        err2 = err;
        flag = 0;

        if err2 > -dx {
            err -= dy;
            x += sx;
            flag += 1;
        }

        if err2 < dy {
            err += dx;
            y += sy;
            flag += 2;
        }
    }
    // the start cell inherits the direction of travel
    if res.len() > 1 {
        res[0].2 = res[1].2;
    }
    res
}

/// Midpoint circle centered at (x0, y0)
pub fn circle(x0: i16, y0: i16, radius: i16) -> Vec<(i16, i16)> {
    let mut points = Vec::new();
    let mut x: i16 = 0;
    let mut y: i16 = radius;
    let mut d: i16 = 3 - 2 * radius;

    while x <= y {
        // each octant is symmetric, push them all at once
        points.push((x0 + x, y0 + y));
        points.push((x0 - x, y0 + y));
        points.push((x0 + x, y0 - y));
        points.push((x0 - x, y0 - y));
        points.push((x0 + y, y0 + x));
        points.push((x0 - y, y0 + x));
        points.push((x0 + y, y0 - x));
        points.push((x0 - y, y0 - x));
        x += 1;
        if d > 0 {
            y -= 1;
            d = d + 4 * (x - y) + 10;
        } else {
            d = d + 4 * x + 6;
        }
    }
    points
}
