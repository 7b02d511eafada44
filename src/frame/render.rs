//! HTML frame document and SVG image rendering.
//!
//! The frame document carries the `fc:frame` meta tags a client needs to
//! draw the image and buttons; the image itself is an SVG served from
//! `<public_url>/image` with the display message in the query string.

use crate::frame::action::BUTTONS;
use reqwest::Url;

pub const FRAME_TITLE: &str = "Powerloom";

const IMAGE_WIDTH: u32 = 1200;
const IMAGE_HEIGHT: u32 = 630;
const FONT_SIZE: f64 = 36.0;
const LINE_HEIGHT: f64 = 1.4;
const MAX_LINE_CHARS: usize = 56;

/// Absolute URL of the image for `message`
pub fn image_url(public_url: &str, message: &str) -> Result<String, String> {
    let mut url = Url::parse(&format!("{}/image", public_url.trim_end_matches('/')))
        .map_err(|e| format!("invalid frame public_url '{}': {}", public_url, e))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url.to_string())
}

/// Full frame document for `message`
pub fn render_frame_html(public_url: &str, message: &str) -> Result<String, String> {
    let image = escape_markup(&image_url(public_url, message)?);
    let post_url = escape_markup(public_url);

    let mut html = String::with_capacity(1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", FRAME_TITLE));
    html.push_str(&meta("og:title", FRAME_TITLE));
    html.push_str(&meta("og:image", &image));
    html.push_str(&meta("fc:frame", "vNext"));
    html.push_str(&meta("fc:frame:image", &image));
    html.push_str(&meta("fc:frame:image:aspect_ratio", "1.91:1"));
    html.push_str(&meta("fc:frame:post_url", &post_url));
    for (i, (_, label)) in BUTTONS.iter().enumerate() {
        html.push_str(&meta(&format!("fc:frame:button:{}", i + 1), label));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">\n",
        image,
        escape_markup(message),
        IMAGE_WIDTH,
        IMAGE_HEIGHT
    ));
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

// `content` must already be escaped
fn meta(property: &str, content: &str) -> String {
    format!("<meta property=\"{}\" content=\"{}\">\n", property, content)
}

/// SVG image: purple gradient, centered white text
pub fn render_svg(text: &str) -> String {
    let lines = wrap_text(text, MAX_LINE_CHARS);
    let line_step = FONT_SIZE * LINE_HEIGHT;
    let center_y = f64::from(IMAGE_HEIGHT) / 2.0;
    let first_y = center_y - line_step * (lines.len().saturating_sub(1) as f64) / 2.0;

    let mut svg = String::with_capacity(1024);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = IMAGE_WIDTH,
        h = IMAGE_HEIGHT
    ));
    svg.push_str(
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\
         <stop offset=\"0%\" stop-color=\"#432889\"/>\
         <stop offset=\"100%\" stop-color=\"#17101F\"/>\
         </linearGradient></defs>\n",
    );
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"url(#bg)\"/>\n");
    svg.push_str(&format!(
        "<text x=\"50%\" fill=\"white\" font-family=\"sans-serif\" font-size=\"{}\" \
         letter-spacing=\"-0.025em\" text-anchor=\"middle\" dominant-baseline=\"middle\">\n",
        FONT_SIZE
    ));
    for (i, line) in lines.iter().enumerate() {
        svg.push_str(&format!(
            "<tspan x=\"50%\" y=\"{:.1}\">{}</tspan>\n",
            first_y + line_step * i as f64,
            escape_markup(line)
        ));
    }
    svg.push_str("</text>\n</svg>\n");

    svg
}

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Escape text for HTML/XML attribute and element content
pub fn escape_markup(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_encodes_message() {
        let url = image_url("http://localhost:3000/api/", "Current Epoch ID: 42").unwrap();
        assert_eq!(url, "http://localhost:3000/api/image?text=Current+Epoch+ID%3A+42");
    }

    #[test]
    fn test_image_url_rejects_relative_base() {
        assert!(image_url("/api", "hello").is_err());
    }

    #[test]
    fn test_render_frame_html_has_frame_tags() {
        let html = render_frame_html("https://frame.example/api", "Welcome! to Powerloom").unwrap();
        assert!(html.contains(r#"<meta property="fc:frame" content="vNext">"#));
        assert!(html.contains(r#"<meta property="fc:frame:post_url" content="https://frame.example/api">"#));
        assert!(html.contains(r#"<meta property="fc:frame:button:1" content="Get EpochID">"#));
        assert!(html.contains(r#"<meta property="fc:frame:button:2" content="Top 3">"#));
        assert!(html.contains(r#"<meta property="fc:frame:button:3" content="UniswapV2 Total">"#));
        assert!(html.contains(r#"<meta property="fc:frame:button:4" content="Reset">"#));
        assert!(html.contains("https://frame.example/api/image?text=Welcome%21+to+Powerloom"));
    }

    #[test]
    fn test_render_frame_html_escapes_message() {
        let html = render_frame_html("https://frame.example/api", "<b>\"x\"</b>").unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("alt=\"&lt;b&gt;&quot;x&quot;&lt;/b&gt;\""));
    }

    #[test]
    fn test_render_svg_escapes_and_centers() {
        let svg = render_svg("A & B <C>");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("A &amp; B &lt;C&gt;"));
        assert!(svg.contains("y=\"315.0\""));
        assert!(svg.contains("#432889"));
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);

        let lines = wrap_text("supercalifragilistic word", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "word"]);

        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
