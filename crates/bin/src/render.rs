//! Text and SVG renderings of a finished tree.
//!
//! Only the public traversal API is used here.

use quadtree::{Boundary, Region};

fn label(region: &Region) -> &'static str {
    region.quadrant().map_or("root", |q| q.name())
}

/// Indented outline, one line per region.
pub fn outline(tree: &Region) -> String {
    let mut out = String::new();
    for region in tree {
        let indent = "  ".repeat((region.depth() - tree.depth()) as usize);
        let line = if region.is_subdivided() {
            format!("{}{} {}\n", indent, label(region), region.boundary())
        } else {
            let points: Vec<String> = region
                .points()
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            format!(
                "{}{} {} [{}]\n",
                indent,
                label(region),
                region.boundary(),
                points.join(", ")
            )
        };
        out.push_str(&line);
    }
    out
}

/// SVG picture: a red outline per region and a blue dot per point.
pub fn svg(tree: &Region, scale: f64) -> String {
    let root = tree.boundary();
    let width = root.width() * scale;
    let height = root.height() * scale;

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.2}\" height=\"{:.2}\" viewBox=\"0 0 {:.2} {:.2}\">\n",
        width, height, width, height
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    for region in tree {
        let (x, y, w, h) = project(root, region.boundary(), scale);
        out.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"red\" stroke-width=\"1\"/>\n",
            x, y, w, h
        ));
    }

    for point in tree.all_points() {
        out.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2.5\" fill=\"blue\"/>\n",
            (point.x - root.x()) * scale,
            (point.y - root.y()) * scale
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn project(root: Boundary, b: Boundary, scale: f64) -> (f64, f64, f64, f64) {
    (
        (b.x() - root.x()) * scale,
        (b.y() - root.y()) * scale,
        b.width() * scale,
        b.height() * scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadtree::Point;

    fn small_tree() -> Region {
        let mut tree = Region::from_rect(0.0, 0.0, 100.0, 100.0, 1).unwrap();
        tree.insert(Point::new(10.0, 10.0)).unwrap();
        tree.insert(Point::new(90.0, 90.0)).unwrap();
        tree
    }

    #[test]
    fn test_outline() {
        let text = outline(&small_tree());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root (0, 0, 100, 100)",
                "  northeast (50, 0, 50, 50) []",
                "  northwest (0, 0, 50, 50) [(10, 10)]",
                "  southeast (50, 50, 50, 50) [(90, 90)]",
                "  southwest (0, 50, 50, 50) []",
            ]
        );
    }

    #[test]
    fn test_svg_counts() {
        let image = svg(&small_tree(), 2.0);
        assert!(image.starts_with("<svg"));
        assert!(image.trim_end().ends_with("</svg>"));
        // Background plus five regions.
        assert_eq!(image.matches("<rect").count(), 6);
        assert_eq!(image.matches("<circle").count(), 2);
        assert!(image.contains("cx=\"180.00\" cy=\"180.00\""));
    }
}
