//! SVG path data parsing
//!
//! Turns the `d` attribute of an SVG `<path>` into absolute [`PathCommand`]s.
//! Supported: M L H V Q T C S Z in absolute and relative form.
//! Elliptical arcs (A) are rejected.

use super::commands::PathCommand;
use crate::draw::geometry::Point;

/// Character cursor over path data
struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(data: &'a str) -> Self {
        Lexer { bytes: data.as_bytes(), pos: 0 }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b',' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_separators();
        self.pos >= self.bytes.len()
    }

    /// Next byte is the start of a number
    fn at_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.bytes.get(self.pos), Some(b'0'..=b'9' | b'-' | b'+' | b'.'))
    }

    fn at_command(&mut self) -> bool {
        self.skip_separators();
        matches!(self.bytes.get(self.pos), Some(c) if c.is_ascii_alphabetic())
    }

    fn command(&mut self) -> Option<u8> {
        self.skip_separators();
        let c = *self.bytes.get(self.pos)?;
        if c.is_ascii_alphabetic() {
            self.pos += 1;
            Some(c)
        } else {
            None
        }
    }

    fn number(&mut self) -> anyhow::Result<f64> {
        self.skip_separators();
        let start = self.pos;
        let peek = |lx: &Self| lx.bytes.get(lx.pos).copied();

        if matches!(peek(self), Some(b'-' | b'+')) {
            self.pos += 1;
        }
        let mut digits = 0;
        while matches!(peek(self), Some(b'0'..=b'9')) {
            self.pos += 1;
            digits += 1;
        }
        if peek(self) == Some(b'.') {
            self.pos += 1;
            while matches!(peek(self), Some(b'0'..=b'9')) {
                self.pos += 1;
                digits += 1;
            }
        }
        anyhow::ensure!(digits > 0, "expected a number at offset {}", start);

        if matches!(peek(self), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(peek(self), Some(b'-' | b'+')) {
                self.pos += 1;
            }
            let mut exp_digits = 0;
            while matches!(peek(self), Some(b'0'..=b'9')) {
                self.pos += 1;
                exp_digits += 1;
            }
            if exp_digits == 0 {
                self.pos = mark;
            }
        }

        // Only ASCII was consumed, so the slice is valid UTF-8
        let text = std::str::from_utf8(&self.bytes[start..self.pos])?;
        Ok(text.parse::<f64>()?)
    }

    fn point(&mut self) -> anyhow::Result<Point> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::new(x, y))
    }
}

/// Parse SVG path data into absolute path commands
pub fn parse_path_data(data: &str) -> anyhow::Result<Vec<PathCommand>> {
    let mut lexer = Lexer::new(data);
    let mut commands = Vec::new();

    let mut current = Point::default();
    let mut start = Point::default();
    // Last control point of the previous Q/T or C/S, for smooth continuations
    let mut last_quad_ctrl: Option<Point> = None;
    let mut last_cubic_ctrl: Option<Point> = None;
    let mut active: Option<u8> = None;
    // Set by Z: a drawing command that follows starts a new sub-path at `start`
    let mut reopen = false;

    while !lexer.at_end() {
        let cmd = match lexer.command() {
            Some(c) => c,
            None => match active {
                // Repeated coordinates reuse the previous command
                Some(c) => c,
                None => anyhow::bail!("expected a path command at offset {}", lexer.pos),
            },
        };
        let upper = cmd.to_ascii_uppercase();
        if reopen && upper != b'M' && upper != b'Z' {
            commands.push(PathCommand::MoveTo { x: start.x, y: start.y });
        }
        reopen = false;

        let relative = cmd.is_ascii_lowercase();
        let origin = if relative { current } else { Point::default() };

        let mut next_quad_ctrl = None;
        let mut next_cubic_ctrl = None;

        match upper {
            b'M' => {
                let p = origin + lexer.point()?;
                commands.push(PathCommand::MoveTo { x: p.x, y: p.y });
                current = p;
                start = p;
                // Extra coordinate pairs after a moveto are implicit linetos
                active = Some(if relative { b'l' } else { b'L' });
                reset_controls(&mut last_quad_ctrl, &mut last_cubic_ctrl);
                continue;
            }
            b'L' => {
                let p = origin + lexer.point()?;
                commands.push(PathCommand::LineTo { x: p.x, y: p.y });
                current = p;
            }
            b'H' => {
                let x = lexer.number()? + origin.x;
                commands.push(PathCommand::LineTo { x, y: current.y });
                current.x = x;
            }
            b'V' => {
                let y = lexer.number()? + origin.y;
                commands.push(PathCommand::LineTo { x: current.x, y });
                current.y = y;
            }
            b'Q' => {
                let c = origin + lexer.point()?;
                let p = origin + lexer.point()?;
                commands.push(PathCommand::QuadTo { cx: c.x, cy: c.y, x: p.x, y: p.y });
                next_quad_ctrl = Some(c);
                current = p;
            }
            b'T' => {
                let c = reflect(last_quad_ctrl, current);
                let p = origin + lexer.point()?;
                commands.push(PathCommand::QuadTo { cx: c.x, cy: c.y, x: p.x, y: p.y });
                next_quad_ctrl = Some(c);
                current = p;
            }
            b'C' => {
                let c1 = origin + lexer.point()?;
                let c2 = origin + lexer.point()?;
                let p = origin + lexer.point()?;
                commands.push(PathCommand::CubicTo {
                    c1x: c1.x, c1y: c1.y, c2x: c2.x, c2y: c2.y, x: p.x, y: p.y,
                });
                next_cubic_ctrl = Some(c2);
                current = p;
            }
            b'S' => {
                let c1 = reflect(last_cubic_ctrl, current);
                let c2 = origin + lexer.point()?;
                let p = origin + lexer.point()?;
                commands.push(PathCommand::CubicTo {
                    c1x: c1.x, c1y: c1.y, c2x: c2.x, c2y: c2.y, x: p.x, y: p.y,
                });
                next_cubic_ctrl = Some(c2);
                current = p;
            }
            b'Z' => {
                commands.push(PathCommand::Close);
                current = start;
                active = None;
                reopen = true;
                reset_controls(&mut last_quad_ctrl, &mut last_cubic_ctrl);
                continue;
            }
            b'A' => anyhow::bail!("elliptical arc commands are not supported"),
            other => anyhow::bail!("unknown path command '{}'", other as char),
        }

        last_quad_ctrl = next_quad_ctrl;
        last_cubic_ctrl = next_cubic_ctrl;
        active = Some(cmd);

        if !lexer.at_end() && !lexer.at_number() && !lexer.at_command() {
            anyhow::bail!("unexpected character at offset {}", lexer.pos);
        }
    }

    Ok(commands)
}

fn reset_controls(quad: &mut Option<Point>, cubic: &mut Option<Point>) {
    *quad = None;
    *cubic = None;
}

/// Reflection of the previous control point about the current point
fn reflect(ctrl: Option<Point>, current: Point) -> Point {
    match ctrl {
        Some(c) => current * 2.0 - c,
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_square() {
        let cmds = parse_path_data("M0 0 L10 0 L10 10 L0 10 Z").unwrap();
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[0], PathCommand::MoveTo { x: 0.0, y: 0.0 });
        assert_eq!(cmds[2], PathCommand::LineTo { x: 10.0, y: 10.0 });
        assert_eq!(cmds[4], PathCommand::Close);
    }

    #[test]
    fn test_relative_and_implicit_lineto() {
        let cmds = parse_path_data("m10,10 5,0 0,5 h-5 z").unwrap();
        assert_eq!(
            cmds,
            vec![
                PathCommand::MoveTo { x: 10.0, y: 10.0 },
                PathCommand::LineTo { x: 15.0, y: 10.0 },
                PathCommand::LineTo { x: 15.0, y: 15.0 },
                PathCommand::LineTo { x: 10.0, y: 15.0 },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_compact_numbers() {
        let cmds = parse_path_data("M.5.5L-1-2e1").unwrap();
        assert_eq!(cmds[0], PathCommand::MoveTo { x: 0.5, y: 0.5 });
        assert_eq!(cmds[1], PathCommand::LineTo { x: -1.0, y: -20.0 });
    }

    #[test]
    fn test_smooth_curves_reflect_controls() {
        let cmds = parse_path_data("M0 0 Q5 5 10 0 T20 0 C20 5 25 5 25 0 S30 -5 30 0").unwrap();
        assert_eq!(cmds[2], PathCommand::QuadTo { cx: 15.0, cy: -5.0, x: 20.0, y: 0.0 });
        assert_eq!(
            cmds[4],
            PathCommand::CubicTo { c1x: 25.0, c1y: -5.0, c2x: 30.0, c2y: -5.0, x: 30.0, y: 0.0 }
        );
    }

    #[test]
    fn test_vertical_line_and_close_resets_cursor() {
        let cmds = parse_path_data("M1 1 V4 H3 Z l1 1").unwrap();
        assert_eq!(cmds[1], PathCommand::LineTo { x: 1.0, y: 4.0 });
        assert_eq!(cmds[2], PathCommand::LineTo { x: 3.0, y: 4.0 });
        // After Z the next sub-path restarts at the previous start point
        assert_eq!(cmds[4], PathCommand::MoveTo { x: 1.0, y: 1.0 });
        assert_eq!(cmds[5], PathCommand::LineTo { x: 2.0, y: 2.0 });
    }

    #[test]
    fn test_rejects_arcs_and_garbage() {
        assert!(parse_path_data("M0 0 A5 5 0 0 1 10 10").is_err());
        assert!(parse_path_data("10 10").is_err());
        assert!(parse_path_data("M0 0 L1").is_err());
        assert!(parse_path_data("M0 0 L1 1 #").is_err());
    }
}
