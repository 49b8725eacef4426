//! Serialization of a configuration tree back to text
//!
//! The printed form is canonical: every entry is `key=value ` (one
//! trailing space) followed by a newline, the `main` section is a bare
//! block of entries framed by blank lines, and every other section opens
//! with a ` [name]` header line. Inter-token whitespace of the parsed
//! input is never reproduced.

use crate::ast::{Ast, MAIN_SECTION};

/// Renders `ast` in the canonical on-disk form.
pub fn print(ast: &Ast) -> String {
    let mut out = String::new();
    for section in &ast.sections {
        if section.name == MAIN_SECTION {
            out.push_str("\n\n");
        } else {
            out.push_str(&format!("\n [{}]\n", section.name));
        }
        for entry in &section.entries {
            out.push_str(&format!("{}={} \n", entry.key, entry.value));
        }
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Section;
    use crate::parser;

    #[test]
    fn named_section_form() {
        let mut ast = Ast::new();
        let mut trunk = Section::new("trunk0", 0);
        trunk.push("imei", "123456789012345");
        trunk.push("imsi", "001010000000001");
        ast.sections.push(trunk);
        assert_eq!(
            print(&ast),
            "\n [trunk0]\nimei=123456789012345 \nimsi=001010000000001 \n\n\n"
        );
    }

    #[test]
    fn main_section_form() {
        let mut ast = Ast::new();
        let mut main = Section::new(MAIN_SECTION, 0);
        main.push("foo", "bar");
        ast.sections.push(main);
        assert_eq!(print(&ast), "\n\nfoo=bar \n\n\n");
    }

    #[test]
    fn empty_tree_prints_nothing() {
        assert_eq!(print(&Ast::new()), "");
    }

    #[test]
    fn whitespace_of_the_input_is_not_reproduced() {
        let ast = parser::parse("a = b\n\n").unwrap();
        assert_eq!(print(&ast), "\n\na=b \n\n\n");
    }

    #[test]
    fn canonical_text_is_a_fixed_point() {
        let text = "\n\nfoo=bar \n\n\n\n [t]\nk=v \n\n\n";
        let ast = parser::parse(text).unwrap();
        assert_eq!(print(&ast), text);
    }
}
