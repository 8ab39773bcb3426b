//! Golden snapshot tests for proxy codegen
//!
//! These tests generate proxies for the canonical document shapes and compare
//! the output against inline snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use docproxy::{ClassDescriptor, GeneratorConfig, ProxyFactory, Target};

fn php(ty: &ClassDescriptor) -> String {
    ProxyFactory::new(GeneratorConfig::new().with_banner(""))
        .generate(ty)
        .expect("generation failed")
        .into_string()
}

fn rust(ty: &ClassDescriptor) -> String {
    ProxyFactory::new(GeneratorConfig::new().with_target(Target::Rust))
        .generate(ty)
        .expect("generation failed")
        .into_string()
}

fn comment() -> ClassDescriptor {
    ClassDescriptor::new("App\\Document\\Comment")
        .with_property("body")
        .with_method("getBody")
}

// ============================================================================
// PHP
// ============================================================================

#[test]
fn test_article_codegen() {
    let ty = ClassDescriptor::new("App\\Document\\Article").with_properties(["title", "publishedAt"]);
    insta::assert_snapshot!(php(&ty), @r#"
<?php

namespace App\Document\_Proxy;

class Article extends \App\Document\Article implements \Docproxy\Mapping\Proxy\ProxyInterface
{
    private $__isInitialized = false;

    public function __isInitialized()
    {
        return $this->__isInitialized;
    }

    public function __setInitialized($initialized)
    {
        $this->__isInitialized = $initialized;
    }

    public function getTitle()
    {
        return $this->title;
    }

    public function setTitle($title)
    {
        $this->title = $title;
    }

    public function getPublishedAt()
    {
        return $this->publishedAt;
    }

    public function setPublishedAt($publishedAt)
    {
        $this->publishedAt = $publishedAt;
    }
}
"#);
}

#[test]
fn test_existing_getter_codegen() {
    insta::assert_snapshot!(php(&comment()), @r#"
<?php

namespace App\Document\_Proxy;

class Comment extends \App\Document\Comment implements \Docproxy\Mapping\Proxy\ProxyInterface
{
    private $__isInitialized = false;

    public function __isInitialized()
    {
        return $this->__isInitialized;
    }

    public function __setInitialized($initialized)
    {
        $this->__isInitialized = $initialized;
    }

    public function setBody($body)
    {
        $this->body = $body;
    }
}
"#);
}

#[test]
fn test_inherited_property_codegen() {
    let ty = ClassDescriptor::new("App\\Document\\Reply")
        .with_property("authorName")
        .with_parent(comment());
    insta::assert_snapshot!(php(&ty), @r#"
<?php

namespace App\Document\_Proxy;

class Reply extends \App\Document\Reply implements \Docproxy\Mapping\Proxy\ProxyInterface
{
    private $__isInitialized = false;

    public function __isInitialized()
    {
        return $this->__isInitialized;
    }

    public function __setInitialized($initialized)
    {
        $this->__isInitialized = $initialized;
    }

    public function getAuthorName()
    {
        return $this->authorName;
    }

    public function setAuthorName($authorName)
    {
        $this->authorName = $authorName;
    }

    public function setBody($body)
    {
        $this->body = $body;
    }
}
"#);
}

#[test]
fn test_empty_type_codegen() {
    let code = php(&ClassDescriptor::new("App\\Document\\Tag"));
    assert_eq!(code.matches("public function").count(), 2);
    assert!(code.contains("public function __isInitialized()"));
    assert!(code.contains("public function __setInitialized($initialized)"));
}

#[test]
fn test_default_banner_codegen() {
    let code = ProxyFactory::default()
        .generate(&ClassDescriptor::new("App\\Document\\Tag"))
        .unwrap()
        .into_string();
    assert!(code.starts_with(
        "<?php\n\nnamespace App\\Document\\_Proxy;\n\n/**\n * DO NOT EDIT THIS FILE - IT WAS CREATED BY THE DOCPROXY PROXY FACTORY.\n */\nclass Tag extends"
    ));
    assert!(code.ends_with("}\n}\n"));
}

#[test]
fn test_marker_codegen() {
    let code = ProxyFactory::new(GeneratorConfig::new().with_marker("Acme\\Odm\\Lazy"))
        .marker_source()
        .unwrap();
    assert!(code.contains("namespace Acme\\Odm;\n"));
    assert!(code.contains("interface Lazy\n{\n    public function __isInitialized();\n"));
}

// ============================================================================
// Rust
// ============================================================================

#[test]
fn test_rust_article_codegen() {
    let ty = ClassDescriptor::new("crate::docs::Article")
        .with_typed_property("title", "String")
        .with_typed_property("published_at", "Option<u64>");
    let code = rust(&ty);

    assert!(code.contains("// Module: crate::docs::_proxy\n"));
    assert!(code.contains("pub struct Article {"));
    assert!(code.contains("base: crate::docs::Article,"));
    assert!(code.contains("__is_initialized: bool,"));
    assert!(code.contains("pub fn get_title(&self) -> &String {"));
    assert!(code.contains("pub fn set_published_at(&mut self, published_at: Option<u64>) {"));
    assert!(code.contains("impl ::docproxy::ProxyInterface for Article {"));
    assert!(code.contains("type Target = crate::docs::Article;"));

    let file = syn::parse_file(&code).expect("generated Rust does not parse");
    assert_eq!(file.items.len(), 6);
}

#[test]
fn test_rust_existing_accessor_codegen() {
    let ty = ClassDescriptor::new("crate::docs::Comment")
        .with_typed_property("body", "String")
        .with_method("getBody");
    let code = rust(&ty);
    assert!(!code.contains("fn get_body"));
    assert!(code.contains("pub fn set_body(&mut self, body: String) {"));
}

#[test]
fn test_rust_existing_snake_case_accessor_codegen() {
    let ty = ClassDescriptor::new("crate::docs::Comment")
        .with_typed_property("body", "String")
        .with_method("get_body");
    let code = rust(&ty);
    assert!(!code.contains("fn get_body"));
    assert!(code.contains("pub fn set_body(&mut self, body: String) {"));
}

#[test]
fn test_rust_relative_base_is_rooted() {
    let code = rust(&ClassDescriptor::new("docs::Article").with_typed_property("title", "String"));
    assert!(code.contains("base: ::docs::Article,"));
    assert!(code.contains("type Target = ::docs::Article;"));
}

#[test]
fn test_rust_keyword_property_codegen() {
    let ty = ClassDescriptor::new("crate::docs::Asset").with_typed_property("type", "String");
    let code = rust(&ty);
    assert!(code.contains("pub fn get_type(&self) -> &String {"));
    assert!(code.contains("&self.base.r#type"));
    assert!(syn::parse_file(&code).is_ok());

    let ty = ClassDescriptor::new("crate::jobs::Job").with_typed_property("gen", "u32");
    let code = rust(&ty);
    assert!(code.contains("pub fn get_gen(&self) -> &u32 {"));
    assert!(code.contains("&self.base.r#gen"));
}
