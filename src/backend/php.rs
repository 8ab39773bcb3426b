//! PHP proxy classes.
//!
//! A PHP proxy is a plain subclass: `class Article extends \App\Document\Article implements \...\ProxyInterface`.
//! Accessors read and write the inherited property directly; they bypass any magic accessors the parent has.

use std::path::PathBuf;

use docproxy_core::conventions::{
    INITIALIZED_PARAM, PHP_INIT_FLAG_FIELD, PHP_IS_INITIALIZED_METHOD, PHP_MARKER_INTERFACE, PHP_PROXY_SEGMENT,
    PHP_SET_INITIALIZED_METHOD,
};
use docproxy_core::keywords::is_identifier;
use docproxy_core::{Member, ProxyClass, QualifiedName};

use super::Backend;
use super::writer::SourceWriter;
use crate::config::GeneratorConfig;
use crate::error::EmitError;

const SEPARATOR: &str = "\\";

/// Variable PHP reserves for the current object; it cannot be a parameter name.
const THIS_VARIABLE: &str = "this";

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpBackend;

/// `<?php`, the namespace declaration (if any) and the banner docblock.
fn header(w: &mut SourceWriter, namespace: &[String], banner: &str) {
    w.writeln("<?php");
    w.newline();
    if !namespace.is_empty() {
        w.writeln(&format!("namespace {};", namespace.join(SEPARATOR)));
        w.newline();
    }
    if !banner.is_empty() {
        w.writeln("/**");
        for line in banner.lines() {
            if line.is_empty() {
                w.writeln(" *");
            } else {
                w.writeln(&format!(" * {line}"));
            }
        }
        w.writeln(" */");
    }
}

fn method(w: &mut SourceWriter, signature: &str, statement: &str) {
    w.writeln(&format!("public function {signature}"));
    w.block("{", "}", |w| w.writeln(statement));
}

fn member(w: &mut SourceWriter, member: &Member) {
    match member {
        Member::InitFlagField => w.writeln(&format!("private ${PHP_INIT_FLAG_FIELD} = false;")),
        Member::IsInitialized => method(
            w,
            &format!("{PHP_IS_INITIALIZED_METHOD}()"),
            &format!("return $this->{PHP_INIT_FLAG_FIELD};"),
        ),
        Member::SetInitialized => method(
            w,
            &format!("{PHP_SET_INITIALIZED_METHOD}(${INITIALIZED_PARAM})"),
            &format!("$this->{PHP_INIT_FLAG_FIELD} = ${INITIALIZED_PARAM};"),
        ),
        Member::Getter { method: name, property } => method(
            w,
            &format!("{name}()"),
            &format!("return $this->{};", property.name),
        ),
        Member::Setter { method: name, property } => method(
            w,
            &format!("{name}(${})", property.name),
            &format!("$this->{0} = ${0};", property.name),
        ),
    }
}

impl Backend for PhpBackend {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn namespace_separator(&self) -> &'static str {
        SEPARATOR
    }

    fn default_proxy_segment(&self) -> &'static str {
        PHP_PROXY_SEGMENT
    }

    fn default_marker(&self) -> &'static str {
        PHP_MARKER_INTERFACE
    }

    fn render(&self, class: &ProxyClass, config: &GeneratorConfig) -> Result<String, EmitError> {
        if let Some(Member::Setter { property, .. }) = class
            .members
            .iter()
            .find(|m| matches!(m, Member::Setter { property, .. } if property.name == THIS_VARIABLE))
        {
            return Err(EmitError::InvalidName {
                kind: "setter parameter",
                name: format!("${}", property.name),
            });
        }
        let mut w = SourceWriter::new(config.indent_width);
        header(&mut w, &class.namespace, &config.banner);
        w.writeln(&format!(
            "class {} extends \\{} implements \\{}",
            class.name,
            class.base.join(SEPARATOR),
            class.marker.join(SEPARATOR)
        ));
        w.block("{", "}", |w| {
            for (i, m) in class.members.iter().enumerate() {
                if i > 0 {
                    w.blank_lines(1);
                }
                member(w, m);
            }
        });
        Ok(w.finish())
    }

    fn render_marker(&self, config: &GeneratorConfig) -> Result<String, EmitError> {
        let marker = QualifiedName::parse(config.marker())
            .filter(|marker| marker.segments().iter().all(|s| is_identifier(s)))
            .ok_or_else(|| EmitError::InvalidName {
                kind: "marker",
                name: config.marker().to_string(),
            })?;
        let mut w = SourceWriter::new(config.indent_width);
        header(&mut w, marker.namespace(), &config.banner);
        w.writeln(&format!("interface {}", marker.short_name()));
        w.block("{", "}", |w| {
            w.writeln(&format!("public function {PHP_IS_INITIALIZED_METHOD}();"));
            w.blank_lines(1);
            w.writeln(&format!("public function {PHP_SET_INITIALIZED_METHOD}(${INITIALIZED_PARAM});"));
        });
        Ok(w.finish())
    }

    fn relative_path(&self, class: &ProxyClass) -> PathBuf {
        let mut path: PathBuf = class.namespace.iter().collect();
        path.push(format!("{}.{}", class.name, self.file_extension()));
        path
    }
}
