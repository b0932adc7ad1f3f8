//! Output rendering methods.

use super::Emitter;
use super::emitter::RenderedField;

impl Emitter<'_> {
    /// `export type Name = Body;`
    pub(super) fn emit_type_decl(&mut self, name: &str, body: &str) {
        let c = self.c();
        self.emit_export_keyword();
        self.output.push_str(&format!(
            "{} {} {} {}{}\n\n",
            c.paint_syntax("type"),
            c.paint_name(name),
            c.paint_syntax("="),
            body,
            c.paint_syntax(";"),
        ));
    }

    /// `export interface Name extends A, B { ... }`, members in declaration
    /// order.
    pub(super) fn emit_interface(
        &mut self,
        name: &str,
        extends: &[String],
        fields: &[RenderedField],
    ) {
        let c = self.c();
        self.emit_export_keyword();
        self.output
            .push_str(&format!("{} {} ", c.paint_syntax("interface"), c.paint_name(name)));

        if !extends.is_empty() {
            let separator = format!("{} ", c.paint_syntax(","));
            let bases = extends
                .iter()
                .map(|base| c.paint_name(base))
                .collect::<Vec<_>>()
                .join(&separator);
            self.output
                .push_str(&format!("{} {bases} ", c.paint_syntax("extends")));
        }
        self.output.push_str(&format!("{}\n", c.paint_syntax("{")));

        for field in fields {
            self.output.push_str(&format!(
                "  {}{} {}{}\n",
                field.name,
                c.paint_syntax(":"),
                field.ty,
                c.paint_syntax(";"),
            ));
        }

        self.output.push_str(&format!("{}\n\n", c.paint_syntax("}")));
    }

    fn emit_export_keyword(&mut self) {
        if self.config.export {
            let keyword = self.c().paint_syntax("export");
            self.output.push_str(&keyword);
            self.output.push(' ');
        }
    }
}

/// `{ a: A; b: B }`, the inline form of a record body.
pub(super) fn inline_object(fields: &[RenderedField]) -> String {
    let members = fields
        .iter()
        .map(|field| format!("{}: {}", field.name, field.ty))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{{ {members} }}")
}
