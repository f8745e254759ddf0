use super::surface::{StrokeStyle, Surface};

/// One stroked polyline as it was painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<(f64, f64)>,
    pub style: StrokeStyle,
}

impl Stroke {
    fn inside(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.points
            .iter()
            .all(|&(px, py)| px >= x && px <= x + width && py >= y && py <= y + height)
    }
}

/// Retained-mode [`Surface`] that records every stroked subpath.
///
/// Nothing is rasterized; the recorded strokes are the image. A terminal UI
/// replays them onto its own canvas, and tests read them back directly.
#[derive(Debug, Clone)]
pub struct PathCanvas {
    width: f64,
    height: f64,
    path: Vec<Vec<(f64, f64)>>,
    strokes: Vec<Stroke>,
}

impl PathCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            path: Vec::new(),
            strokes: Vec::new(),
        }
    }

    /// Strokes painted since the last clear, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn last_stroke(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    /// Vertical extent as `[min, max]` in surface coordinates.
    pub fn y_bounds(&self) -> [f64; 2] {
        [-self.height / 2.0, self.height / 2.0]
    }
}

impl Surface for PathCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let covers_all = x <= 0.0
            && y <= -self.height / 2.0
            && x + width >= self.width
            && y + height >= self.height / 2.0;
        if covers_all {
            self.strokes.clear();
        } else {
            self.strokes.retain(|s| !s.inside(x, y, width, height));
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            // No current point: behaves like move_to
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self, style: StrokeStyle) {
        for subpath in &self.path {
            self.strokes.push(Stroke {
                points: subpath.clone(),
                style,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::Rgb;

    const STYLE: StrokeStyle = StrokeStyle {
        color: Rgb::new(1, 2, 3),
        width: 1.0,
    };

    #[test]
    fn records_subpaths_per_stroke() {
        let mut canvas = PathCanvas::new(100.0, 40.0);
        canvas.begin_path();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(50.0, 5.0);
        canvas.move_to(60.0, -5.0);
        canvas.line_to(100.0, 0.0);
        canvas.stroke(STYLE);

        assert_eq!(canvas.strokes().len(), 2);
        assert_eq!(canvas.strokes()[0].points, vec![(0.0, 0.0), (50.0, 5.0)]);
        assert_eq!(canvas.strokes()[1].points, vec![(60.0, -5.0), (100.0, 0.0)]);
    }

    #[test]
    fn begin_path_discards_previous_path() {
        let mut canvas = PathCanvas::new(10.0, 10.0);
        canvas.begin_path();
        canvas.move_to(1.0, 1.0);
        canvas.line_to(2.0, 2.0);
        canvas.stroke(STYLE);

        canvas.begin_path();
        canvas.line_to(3.0, 3.0);
        canvas.stroke(STYLE);

        assert_eq!(canvas.strokes().len(), 2);
        assert_eq!(canvas.last_stroke().map(|s| s.points.clone()), Some(vec![(3.0, 3.0)]));
    }

    #[test]
    fn full_clear_drops_all_strokes() {
        let mut canvas = PathCanvas::new(10.0, 10.0);
        canvas.begin_path();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke(STYLE);

        canvas.clear();
        assert!(canvas.strokes().is_empty());
    }

    #[test]
    fn partial_clear_keeps_strokes_outside() {
        let mut canvas = PathCanvas::new(10.0, 10.0);
        canvas.begin_path();
        canvas.move_to(1.0, 1.0);
        canvas.line_to(2.0, 2.0);
        canvas.stroke(STYLE);
        canvas.begin_path();
        canvas.move_to(8.0, 1.0);
        canvas.line_to(9.0, 2.0);
        canvas.stroke(STYLE);

        canvas.clear_rect(0.0, 0.0, 5.0, 5.0);
        assert_eq!(canvas.strokes().len(), 1);
        assert_eq!(canvas.strokes()[0].points[0], (8.0, 1.0));
    }
}
