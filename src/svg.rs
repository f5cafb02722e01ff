use crate::point::{PlanarBoundingBox, PlanarPoint};

const SIZE: f64 = 500.0;

pub struct SVG {
    bbox: PlanarBoundingBox,
    padding: f64,
    elements: Vec<String>,
}

impl SVG {
    pub fn init(b: &PlanarBoundingBox) -> Self {
        Self {
            bbox: b.clone(),
            padding: 0.1,
            elements: Vec::new(),
        }
    }
    /// Viewport fitted around `points`.
    pub fn around(points: &[PlanarPoint]) -> Self {
        let b = PlanarBoundingBox::of(points).unwrap_or(PlanarBoundingBox {
            min: PlanarPoint { x: 0.0, y: 0.0 },
            max: PlanarPoint { x: 1.0, y: 1.0 },
        });
        Self::init(&b)
    }
    /// Outline with a translucent fill and a marker on every vertex.
    pub fn add_shape(&mut self, points: &[PlanarPoint]) {
        let s = points
            .iter()
            .map(|p| {
                let (x, y) = self.transform(p.x, p.y);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<String>>()
            .join(" ");
        self.elements.push(format!(
            r#"  <polygon points="{}" fill="cyan" fill-opacity="0.3" stroke="blue" stroke-width="2"/>"#,
            s
        ));
        for p in points {
            let (x, y) = self.transform(p.x, p.y);
            self.elements.push(format!(
                r#"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="blue"/>"#,
                x, y
            ));
        }
    }
    pub fn add_label(&mut self, text: &str) {
        self.elements.push(format!(
            r#"  <text x="10" y="20" font-family="sans-serif" font-size="14">{}</text>"#,
            text
        ));
    }
    pub fn render(&self) -> String {
        let mut svg = format!(
            r#"<svg width="{0}" height="{0}" xmlns="http://www.w3.org/2000/svg">"#,
            SIZE
        );
        svg.push('\n');
        for e in &self.elements {
            svg.push_str(e);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
    pub fn width(&self) -> f64 {
        self.bbox.width()
    }
    pub fn height(&self) -> f64 {
        self.bbox.height()
    }
    pub fn scale(&self) -> f64 {
        let padded_width = self.width() * (1.0 + 2.0 * self.padding);
        let padded_height = self.height() * (1.0 + 2.0 * self.padding);
        let extent = padded_width.max(padded_height);
        if extent > 0.0 { SIZE / extent } else { 1.0 }
    }
    fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        let svg_x = (x - self.bbox.min.x + self.width() * self.padding) * self.scale();
        let svg_y = SIZE - (y - self.bbox.min.y + self.height() * self.padding) * self.scale();
        (svg_x, svg_y)
    }
}
