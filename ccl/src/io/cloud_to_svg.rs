use svg::Document;
use svg::node::element::{Circle, Group, Rectangle, Text, Title};

use tagcloud_rs::geometry::primitives::Rect;

use crate::io::svg_util::SvgDrawOptions;
use crate::sizer::SizedTag;

/// Renders a placed cloud to an SVG document. `tags` and `rects` run in
/// placement order and must have equal length; the collections are consumed
/// read-only.
pub fn cloud_to_svg(
    tags: &[SizedTag],
    rects: &[Rect],
    options: SvgDrawOptions,
    name: &str,
) -> Document {
    assert_eq!(tags.len(), rects.len(), "every tag needs a placed rect");

    let extent = rects
        .iter()
        .copied()
        .reduce(Rect::bounding_rect)
        .unwrap_or(Rect {
            x_min: -1,
            y_min: -1,
            x_max: 1,
            y_max: 1,
        });

    let theme = options.theme.get_theme();
    let margin = i32::max(extent.width(), extent.height()) / 20 + 10;
    let vbox = (
        extent.x_min - margin,
        extent.y_min - margin,
        extent.width() + 2 * margin,
        extent.height() + 2 * margin,
    );

    let background = Rectangle::new()
        .set("x", vbox.0)
        .set("y", vbox.1)
        .set("width", vbox.2)
        .set("height", vbox.3)
        .set("fill", theme.background_fill);

    let mut tags_group = Group::new().set("id", "tags");
    for (i, (tag, rect)) in tags.iter().zip(rects.iter()).enumerate() {
        let fill = theme.tag_fills[i % theme.tag_fills.len()];
        let title = Title::new(format!(
            "tag '{}', weight: {:.1}, rect: [x_min: {}, y_min: {}, x_max: {}, y_max: {}]",
            tag.text, tag.weight, rect.x_min, rect.y_min, rect.x_max, rect.y_max
        ));
        let box_el = Rectangle::new()
            .set("x", rect.x_min)
            .set("y", rect.y_min)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", fill)
            .set("stroke", "black")
            .set("stroke-width", theme.stroke_width);

        let (cx, cy) = rect.centroid();
        let text_el = Text::new(tag.text.clone())
            .set("x", cx)
            .set("y", cy)
            .set("fill", theme.text_fill)
            .set("font-size", (rect.height() as f64 * 0.7).max(1.0))
            .set("font-family", "sans-serif")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central");

        tags_group = tags_group.add(
            Group::new()
                .set("id", format!("tag_{i}"))
                .add(title)
                .add(box_el)
                .add(text_el),
        );
    }

    let mut document = Document::new()
        .set("viewBox", vbox)
        .add(Title::new(name.to_string()))
        .add(background)
        .add(tags_group);

    if options.draw_extent {
        document = document.add(
            Rectangle::new()
                .set("x", extent.x_min)
                .set("y", extent.y_min)
                .set("width", extent.width())
                .set("height", extent.height())
                .set("fill", "none")
                .set("stroke", theme.extent_stroke)
                .set("stroke-width", theme.stroke_width)
                .set("stroke-dasharray", theme.stroke_width * 4.0),
        );
    }

    if options.draw_origin {
        document = document.add(
            Circle::new()
                .set("cx", 0)
                .set("cy", 0)
                .set("r", theme.stroke_width * 2.0)
                .set("fill", theme.extent_stroke),
        );
    }

    document
}
