use pagecraft_model::{Document, Element, ElementKind};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Page title for the document head
    pub title: String,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "Exported Page".to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.clone();
            for _ in 0..self.depth {
                self.add(&indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Minimal embedded styling so the exported page renders without the
/// editor.
const PAGE_CSS: &str = "* { box-sizing: border-box; margin: 0; padding: 0; } \
body { font-family: 'DM Sans', sans-serif; background: #060a10; color: #e8edf5; } \
.page { max-width: 800px; margin: 0 auto; padding: 40px 24px; }";

const FONT_LINK: &str = "<link href=\"https://fonts.googleapis.com/css2?family=DM+Sans&family=Syne:wght@700&display=swap\" rel=\"stylesheet\">";

/// Compile a document to a complete standalone HTML page.
///
/// Interpolates live property values at the moment of export; nothing
/// is cached between calls.
pub fn compile_to_html(document: &Document, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"page\">");
    ctx.indent();

    for element in document.iter() {
        ctx.add_line(&compile_element(element));
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    let title = escape_html(&ctx.options.title);

    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\" />");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />");
    ctx.add_line(&format!("<title>{}</title>", title));
    ctx.add_line(FONT_LINK);
    ctx.add_line(&format!("<style>{}</style>", PAGE_CSS));

    ctx.dedent();
    ctx.add_line("</head>");
}

/// Kind-specific markup for one element, interpolating its current
/// property values.
pub fn compile_element(el: &Element) -> String {
    match el.kind {
        ElementKind::Heading => {
            let level = el.prop_str("level");
            let tag = heading_tag(&level);
            format!(
                "<{tag} style=\"font-size:{}px;color:{};font-weight:{};text-align:{};margin-bottom:16px;\">{}</{tag}>",
                el.prop_str("fontSize"),
                el.prop_str("color"),
                el.prop_str("fontWeight"),
                el.prop_str("textAlign"),
                escape_html(&el.prop_str("text")),
            )
        }

        ElementKind::Paragraph => format!(
            "<p style=\"font-size:{}px;color:{};text-align:{};line-height:{};margin-bottom:16px;\">{}</p>",
            el.prop_str("fontSize"),
            el.prop_str("color"),
            el.prop_str("textAlign"),
            el.prop_str("lineHeight"),
            escape_html(&el.prop_str("text")),
        ),

        ElementKind::Button => format!(
            "<a href=\"{}\" style=\"display:inline-block;background:{};color:{};font-size:{}px;border-radius:{}px;padding:{};text-decoration:none;margin-bottom:16px;\">{}</a>",
            escape_html(&el.prop_str("href")),
            el.prop_str("bg"),
            el.prop_str("color"),
            el.prop_str("fontSize"),
            el.prop_str("borderRadius"),
            el.prop_str("padding"),
            escape_html(&el.prop_str("text")),
        ),

        ElementKind::Image => format!(
            "<img src=\"{}\" alt=\"{}\" style=\"width:{};height:{}px;border-radius:{}px;object-fit:{};display:block;margin-bottom:16px;\" />",
            escape_html(&el.prop_str("src")),
            escape_html(&el.prop_str("alt")),
            el.prop_str("width"),
            el.prop_str("height"),
            el.prop_str("borderRadius"),
            el.prop_str("objectFit"),
        ),

        ElementKind::Divider => format!(
            "<hr style=\"border-color:{};border-top-width:{}px;margin:{}px 0;\" />",
            el.prop_str("color"),
            el.prop_str("thickness"),
            el.prop_str("margin"),
        ),

        ElementKind::Card => format!(
            "<div style=\"background:{};border:1px solid {};border-radius:{}px;padding:{}px;margin-bottom:16px;\"><h3 style=\"color:{};margin-bottom:10px;\">{}</h3><p style=\"color:{};line-height:1.6;font-size:14px;\">{}</p></div>",
            el.prop_str("bg"),
            el.prop_str("borderColor"),
            el.prop_str("borderRadius"),
            el.prop_str("padding"),
            el.prop_str("titleColor"),
            escape_html(&el.prop_str("title")),
            el.prop_str("bodyColor"),
            escape_html(&el.prop_str("body")),
        ),

        // Nested children are not populated, so a section renders only
        // its container styling.
        ElementKind::Section => format!(
            "<div style=\"background:{};padding:{}px;border-radius:{}px;margin-bottom:16px;\"></div>",
            el.prop_str("bg"),
            el.prop_str("padding"),
            el.prop_str("borderRadius"),
        ),

        ElementKind::Badge => format!(
            "<span style=\"background:{};color:{};border:1px solid {};border-radius:{}px;font-size:{}px;padding:4px 12px;display:inline-block;margin-bottom:8px;\">{}</span>",
            el.prop_str("bg"),
            el.prop_str("color"),
            el.prop_str("borderColor"),
            el.prop_str("borderRadius"),
            el.prop_str("fontSize"),
            escape_html(&el.prop_str("text")),
        ),
    }
}

/// Headings only ever publish as h1..h4; anything else falls back to h2.
fn heading_tag(level: &str) -> &str {
    match level {
        "h1" | "h2" | "h3" | "h4" => level,
        _ => "h2",
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
