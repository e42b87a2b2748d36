//! Project-name substitution.
//!
//! Templates are written against a fixed Go module name (`myapp`). Rendering
//! swaps every standalone occurrence of that token for the real project name.
//! Matching is exact and delimited: `myapp` inside `myapplication` or
//! `old_myapp` is left alone, and replaced text is never rescanned.

use crate::domain::{template::TemplateBody, value_objects::ProjectName};

/// Placeholder declared by a template: a token and an optional capitalized
/// spelling that is replaced by the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    token: &'static str,
    capitalized: Option<&'static str>,
}

impl Placeholder {
    /// The module placeholder every builtin template uses.
    pub const MODULE: Placeholder = Placeholder::new("myapp", Some("myApp"));

    pub const fn new(token: &'static str, capitalized: Option<&'static str>) -> Self {
        Self { token, capitalized }
    }

    fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.token).chain(self.capitalized)
    }

    /// Count delimited occurrences of any spelling in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        let mut count = 0;
        scan(text, self, |segment| {
            if segment.is_none() {
                count += 1;
            }
        });
        count
    }
}

/// Renders template bodies for one project name.
#[derive(Debug, Clone)]
pub struct NameSubstitutor<'a> {
    name: &'a ProjectName,
}

impl<'a> NameSubstitutor<'a> {
    pub fn new(name: &'a ProjectName) -> Self {
        Self { name }
    }

    pub fn render(&self, body: &TemplateBody) -> String {
        substitute(body.text, &body.placeholder, self.name.as_str())
    }
}

/// Replace every delimited occurrence of `placeholder` in `text`.
pub fn substitute(text: &str, placeholder: &Placeholder, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    scan(text, placeholder, |segment| match segment {
        Some(literal) => out.push_str(literal),
        None => out.push_str(replacement),
    });
    out
}

/// Walk `text` once, emitting literal runs as `Some(..)` and each placeholder
/// hit as `None`.
fn scan<'t>(text: &'t str, placeholder: &Placeholder, mut emit: impl FnMut(Option<&'t str>)) {
    let mut literal_start = 0;
    let mut pos = 0;
    let mut prev: Option<char> = None;

    while pos < text.len() {
        let rest = &text[pos..];

        if !prev.is_some_and(is_ident_char) {
            let hit = placeholder.spellings().find(|spelling| {
                rest.strip_prefix(spelling)
                    .is_some_and(|after| !after.chars().next().is_some_and(is_ident_char))
            });

            if let Some(spelling) = hit {
                if literal_start < pos {
                    emit(Some(&text[literal_start..pos]));
                }
                emit(None);
                pos += spelling.len();
                literal_start = pos;
                prev = spelling.chars().last();
                continue;
            }
        }

        let Some(c) = rest.chars().next() else { break };
        prev = Some(c);
        pos += c.len_utf8();
    }

    if literal_start < text.len() {
        emit(Some(&text[literal_start..]));
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateId;

    fn body(text: &'static str) -> TemplateBody {
        TemplateBody::new(TemplateId::Routes, text, Placeholder::MODULE)
    }

    fn name(s: &str) -> ProjectName {
        ProjectName::parse(s).unwrap()
    }

    #[test]
    fn replaces_import_paths() {
        let shop = name("shopapi");
        let rendered = NameSubstitutor::new(&shop).render(&body(
            "import (\n\t\"myapp/app/config\"\n\t\"myapp/app/routes\"\n)\n",
        ));
        assert_eq!(
            rendered,
            "import (\n\t\"shopapi/app/config\"\n\t\"shopapi/app/routes\"\n)\n"
        );
    }

    #[test]
    fn replaces_capitalized_variant() {
        let shop = name("shopapi");
        let rendered = NameSubstitutor::new(&shop).render(&body("Hello from myApp!"));
        assert_eq!(rendered, "Hello from shopapi!");
    }

    #[test]
    fn placeholder_inside_longer_identifier_is_untouched() {
        let shop = name("shopapi");
        let text = "myapplication old_myapp myapp2 MYAPP";
        assert_eq!(NameSubstitutor::new(&shop).render(&body(text)), text);
    }

    #[test]
    fn name_occurring_in_unrelated_text_is_untouched() {
        let gin = name("gin");
        let rendered = NameSubstitutor::new(&gin)
            .render(&body("\"github.com/gin-gonic/gin\"\n\"myapp/app/models\""));
        assert_eq!(rendered, "\"github.com/gin-gonic/gin\"\n\"gin/app/models\"");
    }

    #[test]
    fn absent_placeholder_is_a_no_op() {
        let shop = name("shopapi");
        let text = "package utils\n\nfunc HashPassword(pwd string) string { return pwd }\n";
        assert_eq!(NameSubstitutor::new(&shop).render(&body(text)), text);
    }

    #[test]
    fn replacement_is_not_rescanned() {
        // The name itself contains the token; a rescanning implementation would loop
        // or double-substitute.
        let tricky = name("myapp-v2");
        let rendered = NameSubstitutor::new(&tricky).render(&body("module myapp"));
        assert_eq!(rendered, "module myapp-v2");
    }

    #[test]
    fn counts_match_after_rendering() {
        let b = body("APP_NAME=myapp\nDB_NAME=myapp\n// myApp\nmyapplication\n");
        assert_eq!(b.placeholder_count(), 3);

        let inventory = name("inventory_svc");
        let rendered = NameSubstitutor::new(&inventory).render(&b);
        assert_eq!(Placeholder::MODULE.count_in(&rendered), 0);
        assert_eq!(rendered.matches("inventory_svc").count(), 3);
    }

    #[test]
    fn handles_non_ascii_text() {
        let shop = name("shopapi");
        let rendered =
            NameSubstitutor::new(&shop).render(&body("// ⚠️ gagal load .env — myapp ✓"));
        assert_eq!(rendered, "// ⚠️ gagal load .env — shopapi ✓");
    }

    #[test]
    fn placeholder_at_text_edges() {
        let shop = name("shopapi");
        assert_eq!(NameSubstitutor::new(&shop).render(&body("myapp")), "shopapi");
        assert_eq!(
            NameSubstitutor::new(&shop).render(&body("myapp/x/myApp")),
            "shopapi/x/shopapi"
        );
    }
}
