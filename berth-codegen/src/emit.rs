//! Rust source emission for one resource or data source type
//!
//! Every emitted module follows the same layout: imports, `schema()`,
//! the config struct with its builder, the element handle, then one
//! struct, builder, output reference and (for repeated blocks) list view
//! per nested block, and finally read-only views of computed objects.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use heck::{ToSnakeCase, ToUpperCamelCase};

use crate::schema::{CtyType, Nesting, Role, SchemaAttribute, SchemaBlock, SchemaBlockType};

pub const HEADER_NOTE: &str = "DO NOT EDIT MANUALLY - regenerate with berth-codegen";

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Whether the type is a managed resource or a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Resource,
    DataSource,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Resource => "resource",
            Kind::DataSource => "data source",
        }
    }

    fn variant(self) -> &'static str {
        match self {
            Kind::Resource => "ResourceKind::Resource",
            Kind::DataSource => "ResourceKind::DataSource",
        }
    }

    fn schema_constructor(self) -> &'static str {
        match self {
            Kind::Resource => "ResourceSchema::new",
            Kind::DataSource => "ResourceSchema::data_source",
        }
    }
}

/// One type to generate
pub struct TypeSpec<'a> {
    pub tf_type: &'a str,
    pub kind: Kind,
    pub body: &'a SchemaBlock,
}

impl TypeSpec<'_> {
    /// `ecs_cluster` for resource `aws_ecs_cluster`, `data_aws_ecs_cluster` for the data source
    pub fn module_name(&self) -> String {
        match self.kind {
            Kind::Resource => match self.tf_type.split_once('_') {
                Some((_, rest)) => rest.to_snake_case(),
                None => self.tf_type.to_snake_case(),
            },
            Kind::DataSource => format!("data_{}", self.tf_type).to_snake_case(),
        }
    }

    pub fn struct_name(&self) -> String {
        self.module_name().to_upper_camel_case()
    }
}

/// Identifier for a schema name, escaping Rust keywords
pub fn ident(name: &str) -> String {
    let snake = name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// Rust type of a settable attribute
pub fn rust_type(cty: &CtyType) -> String {
    match cty {
        CtyType::String => "String".to_string(),
        CtyType::Number => "f64".to_string(),
        CtyType::Bool => "bool".to_string(),
        CtyType::List(inner) | CtyType::Set(inner) => match inner.as_ref() {
            CtyType::String | CtyType::Number | CtyType::Bool => {
                format!("Vec<{}>", rust_type(inner))
            }
            _ => "Value".to_string(),
        },
        CtyType::Map(inner) if **inner == CtyType::String => {
            "BTreeMap<String, String>".to_string()
        }
        _ => "Value".to_string(),
    }
}

/// `AttributeType` expression for a cty type
pub fn attribute_type(cty: &CtyType) -> String {
    match cty {
        CtyType::String => "AttributeType::String".to_string(),
        CtyType::Number => "AttributeType::Number".to_string(),
        CtyType::Bool => "AttributeType::Bool".to_string(),
        CtyType::List(inner) => format!("AttributeType::List(Box::new({}))", attribute_type(inner)),
        CtyType::Set(inner) => format!("AttributeType::Set(Box::new({}))", attribute_type(inner)),
        CtyType::Map(inner) => format!("AttributeType::Map(Box::new({}))", attribute_type(inner)),
        CtyType::Object(fields) => format!(
            "AttributeType::object([{}])",
            fields
                .iter()
                .map(|(name, t)| format!("({:?}, {})", name, attribute_type(t)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        CtyType::Dynamic => "AttributeType::Dynamic".to_string(),
    }
}

/// Wrap `items` as a comma-terminated list at `indent`, breaking lines before `width`
pub fn wrap_items(items: &[String], indent: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    for item in items {
        let piece = format!("{},", item);
        if current.is_empty() {
            current = format!("{}{}", indent, piece);
        } else if current.len() + 1 + piece.len() > width {
            lines.push(std::mem::take(&mut current));
            current = format!("{}{}", indent, piece);
        } else {
            current.push(' ');
            current.push_str(&piece);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Attribute after type parsing
struct Attr<'a> {
    name: &'a str,
    schema: &'a SchemaAttribute,
    cty: CtyType,
}

impl Attr<'_> {
    fn role(&self) -> Role {
        self.schema.role()
    }

    fn is_settable(&self) -> bool {
        self.role() != Role::Computed
    }

    /// Computed object or collection of objects, exposed through a read-only view
    fn object_view(&self) -> bool {
        self.role() == Role::Computed && self.cty.object_fields().is_some()
    }
}

/// Nested block together with its generated type name
struct NestedBlock<'a> {
    name: &'a str,
    type_name: String,
    owner: String,
    schema: &'a SchemaBlockType,
    nesting: Nesting,
}

/// Computed object attribute together with its generated view name
struct ObjectView<'a> {
    name: &'a str,
    type_name: String,
    owner: String,
    cty: CtyType,
}

fn attributes(body: &SchemaBlock) -> Result<Vec<Attr<'_>>> {
    body.attributes
        .iter()
        .map(|(name, schema)| {
            let cty = schema
                .cty_type()
                .map_err(|e| anyhow::anyhow!("attribute '{}': {}", name, e))?;
            Ok(Attr { name, schema, cty })
        })
        .collect()
}

fn blocks<'a>(body: &'a SchemaBlock, owner: &str) -> Vec<NestedBlock<'a>> {
    body.block_types
        .iter()
        .filter_map(|(name, schema)| {
            let Some(nesting) = schema.nesting() else {
                log::warn!(
                    "skipping block '{}': nesting mode '{}' is not supported",
                    name,
                    schema.nesting_mode
                );
                return None;
            };
            Some(NestedBlock {
                name,
                type_name: format!("{}{}", owner, name.to_upper_camel_case()),
                owner: owner.to_string(),
                schema,
                nesting,
            })
        })
        .collect()
}

/// Every nested block below `body`, parents before children
fn collect_blocks<'a>(body: &'a SchemaBlock, owner: &str, out: &mut Vec<NestedBlock<'a>>) {
    for block in blocks(body, owner) {
        let type_name = block.type_name.clone();
        let schema = block.schema;
        out.push(block);
        collect_blocks(&schema.block, &type_name, out);
    }
}

fn collect_object_views<'a>(
    body: &'a SchemaBlock,
    owner: &str,
    out: &mut Vec<ObjectView<'a>>,
) -> Result<()> {
    for attr in attributes(body)? {
        if attr.object_view() {
            out.push(ObjectView {
                name: attr.name,
                type_name: format!("{}{}", owner, attr.name.to_upper_camel_case()),
                owner: owner.to_string(),
                cty: attr.cty,
            });
        }
    }
    for block in blocks(body, owner) {
        collect_object_views(&block.schema.block, &block.type_name, out)?;
    }
    Ok(())
}

/// Generate the module for one type
pub fn generate_type(spec: &TypeSpec<'_>) -> Result<String> {
    let struct_name = spec.struct_name();

    let mut nested = Vec::new();
    collect_blocks(spec.body, &struct_name, &mut nested);
    let mut views = Vec::new();
    collect_object_views(spec.body, &struct_name, &mut views)?;

    if attributes(spec.body)?.is_empty() {
        bail!("{} has no attributes", spec.tf_type);
    }

    let mut code = String::new();
    emit_header(&mut code, spec, &nested, &views)?;
    emit_schema_fn(&mut code, spec)?;
    emit_value_object(
        &mut code,
        &format!("{}Config", struct_name),
        &format!("Arguments of [`{}`]", struct_name),
        spec.body,
        &struct_name,
        true,
    )?;
    emit_element(&mut code, spec)?;

    for block in &nested {
        emit_value_object(
            &mut code,
            &block.type_name,
            &format!("`{}` block of [`{}`]", block.name, block.owner),
            &block.schema.block,
            &block.type_name,
            false,
        )?;
        emit_output_reference(&mut code, block)?;
        if !block.schema.is_singleton() {
            emit_list(
                &mut code,
                &block.type_name,
                &format!("Instances of the `{}` block", block.name),
            );
        }
    }

    for view in &views {
        emit_object_view(&mut code, view);
    }

    Ok(code)
}

fn any_body(spec: &TypeSpec<'_>, nested: &[NestedBlock<'_>], f: impl Fn(&SchemaBlock) -> bool) -> bool {
    f(spec.body) || nested.iter().any(|b| f(&b.schema.block))
}

fn settable_types(body: &SchemaBlock) -> Vec<String> {
    attributes(body)
        .map(|attrs| {
            attrs
                .iter()
                .filter(|a| a.is_settable())
                .map(|a| rust_type(&a.cty))
                .collect()
        })
        .unwrap_or_default()
}

fn emit_header(
    code: &mut String,
    spec: &TypeSpec<'_>,
    nested: &[NestedBlock<'_>],
    views: &[ObjectView<'_>],
) -> Result<()> {
    let needs_map = any_body(spec, nested, |b| {
        settable_types(b).iter().any(|t| t.contains("BTreeMap"))
    });
    let needs_value = any_body(spec, nested, |b| {
        settable_types(b).iter().any(|t| t.contains("Value"))
    });
    let needs_input = any_body(spec, nested, |b| !settable_types(b).is_empty());
    let needs_list = nested.iter().any(|b| !b.schema.is_singleton())
        || views
            .iter()
            .any(|v| matches!(v.cty, CtyType::List(_) | CtyType::Set(_)));

    let mut imports = vec![
        "AttributeSchema",
        "AttributeType",
        "Block",
        "BlockRef",
        "ConfigError",
        "Fields",
        "MetaArguments",
        "Reference",
        "ResourceHandle",
        "ResourceKind",
        "ResourceSchema",
        "Stack",
        "StackError",
        "TerraformElement",
    ];
    if !nested.is_empty() {
        imports.extend(["BlockSchema", "NestingMode"]);
    }
    if needs_input {
        imports.push("Input");
    }
    if needs_list {
        imports.push("ListRef");
    }
    if needs_value {
        imports.push("Value");
    }
    imports.sort_unstable();
    let imports: Vec<String> = imports.into_iter().map(str::to_string).collect();

    writeln!(code, "//! `{}` {}", spec.tf_type, spec.kind.label())?;
    writeln!(code, "//!")?;
    writeln!(code, "//! {}", HEADER_NOTE)?;
    writeln!(code)?;
    if needs_map {
        writeln!(code, "use std::collections::BTreeMap;")?;
    }
    writeln!(code, "use std::sync::OnceLock;")?;
    writeln!(code)?;
    writeln!(code, "use berth_core::{{")?;
    writeln!(code, "{}", wrap_items(&imports, "    ", 100))?;
    writeln!(code, "}};")?;
    Ok(())
}

fn attribute_schema_line(attr: &Attr<'_>, indent: &str) -> String {
    let mut line = format!(
        "{}.attribute(AttributeSchema::new({:?}, {})",
        indent,
        attr.name,
        attribute_type(&attr.cty)
    );
    match attr.role() {
        Role::Required => line.push_str(".required()"),
        Role::Optional if attr.schema.computed => line.push_str(".computed()"),
        Role::Optional => {}
        Role::Computed => line.push_str(".read_only()"),
    }
    if attr.schema.sensitive {
        line.push_str(".sensitive()");
    }
    if attr.schema.deprecated {
        line.push_str(".deprecated()");
    }
    if let Some(desc) = attr.schema.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(".with_description({:?})", desc));
    }
    line.push(')');
    line
}

/// Chained schema calls for one body, one call per line at `indent`
fn schema_body_lines(body: &SchemaBlock, indent: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for attr in attributes(body)? {
        lines.push(attribute_schema_line(&attr, indent));
    }
    for block in blocks(body, "") {
        let inner = format!("{}        ", indent);
        let nesting = match block.nesting {
            Nesting::Single => "Single",
            Nesting::List => "List",
            Nesting::Set => "Set",
        };

        let mut chain = vec![format!(
            "{}    BlockSchema::new({:?}, NestingMode::{})",
            indent, block.name, nesting
        )];
        if block.schema.min_items > 0 {
            chain.push(format!("{}.min_items({})", inner, block.schema.min_items));
        }
        if block.schema.max_items > 0 {
            chain.push(format!("{}.max_items({})", inner, block.schema.max_items));
        }
        if block.schema.block.deprecated {
            chain.push(format!("{}.deprecated()", inner));
        }
        if let Some(desc) = block.schema.block.description.as_deref().filter(|d| !d.is_empty()) {
            chain.push(format!("{}.with_description({:?})", inner, desc));
        }
        chain.extend(schema_body_lines(&block.schema.block, &inner)?);
        if let Some(last) = chain.last_mut() {
            last.push(',');
        }

        lines.push(format!("{}.block(", indent));
        lines.extend(chain);
        lines.push(format!("{})", indent));
    }
    Ok(lines)
}

fn emit_schema_fn(code: &mut String, spec: &TypeSpec<'_>) -> Result<()> {
    writeln!(code)?;
    writeln!(code, "/// Schema of `{}`", spec.tf_type)?;
    writeln!(code, "pub fn schema() -> &'static ResourceSchema {{")?;
    writeln!(code, "    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();")?;
    writeln!(code, "    SCHEMA.get_or_init(|| {{")?;
    writeln!(
        code,
        "        {}({:?})",
        spec.kind.schema_constructor(),
        spec.tf_type
    )?;
    if let Some(desc) = spec.body.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(code, "            .with_description({:?})", desc)?;
    }
    for line in schema_body_lines(spec.body, "            ")? {
        writeln!(code, "{}", line)?;
    }
    writeln!(code, "    }})")?;
    writeln!(code, "}}")?;
    Ok(())
}

/// Struct field type of a nested block
fn block_field_type(block: &NestedBlock<'_>) -> String {
    if block.schema.is_singleton() {
        if block.schema.is_required() {
            block.type_name.clone()
        } else {
            format!("Option<{}>", block.type_name)
        }
    } else {
        format!("Vec<{}>", block.type_name)
    }
}

/// Config or nested block struct, its builder and its `Block` impl
fn emit_value_object(
    code: &mut String,
    name: &str,
    doc: &str,
    body: &SchemaBlock,
    owner: &str,
    with_meta: bool,
) -> Result<()> {
    let attrs: Vec<Attr<'_>> = attributes(body)?
        .into_iter()
        .filter(Attr::is_settable)
        .collect();
    let nested = blocks(body, owner);

    // Struct
    writeln!(code)?;
    writeln!(code, "/// {}", doc)?;
    writeln!(code, "#[derive(Debug, Clone, PartialEq)]")?;
    writeln!(code, "pub struct {} {{", name)?;
    for attr in &attrs {
        let ty = rust_type(&attr.cty);
        match attr.role() {
            Role::Required => writeln!(code, "    pub {}: Input<{}>,", ident(attr.name), ty)?,
            _ => writeln!(code, "    pub {}: Option<Input<{}>>,", ident(attr.name), ty)?,
        }
    }
    for block in &nested {
        writeln!(code, "    pub {}: {},", ident(block.name), block_field_type(block))?;
    }
    if with_meta {
        writeln!(code, "    pub meta: MetaArguments,")?;
    }
    writeln!(code, "}}")?;

    writeln!(code)?;
    writeln!(code, "impl {} {{", name)?;
    writeln!(code, "    pub fn builder() -> {}Builder {{", name)?;
    writeln!(code, "        {}Builder::default()", name)?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;

    // Builder
    writeln!(code)?;
    writeln!(code, "/// Builder for [`{}`]", name)?;
    writeln!(code, "#[derive(Debug, Clone, Default)]")?;
    writeln!(code, "pub struct {}Builder {{", name)?;
    for attr in &attrs {
        writeln!(
            code,
            "    {}: Option<Input<{}>>,",
            ident(attr.name),
            rust_type(&attr.cty)
        )?;
    }
    for block in &nested {
        if block.schema.is_singleton() {
            writeln!(code, "    {}: Option<{}>,", ident(block.name), block.type_name)?;
        } else {
            writeln!(code, "    {}: Vec<{}>,", ident(block.name), block.type_name)?;
        }
    }
    if with_meta {
        writeln!(code, "    meta: MetaArguments,")?;
    }
    writeln!(code, "}}")?;

    writeln!(code)?;
    writeln!(code, "impl {}Builder {{", name)?;
    let mut methods = Vec::new();
    for attr in &attrs {
        let id = ident(attr.name);
        methods.push(format!(
            "    pub fn {id}(mut self, value: impl Into<Input<{ty}>>) -> Self {{\n        self.{id} = Some(value.into());\n        self\n    }}\n",
            id = id,
            ty = rust_type(&attr.cty)
        ));
    }
    for block in &nested {
        let id = ident(block.name);
        if block.schema.is_singleton() {
            methods.push(format!(
                "    pub fn {id}(mut self, value: {ty}) -> Self {{\n        self.{id} = Some(value);\n        self\n    }}\n",
                id = id,
                ty = block.type_name
            ));
        } else {
            methods.push(format!(
                "    pub fn {id}(mut self, value: impl IntoIterator<Item = {ty}>) -> Self {{\n        self.{id} = value.into_iter().collect();\n        self\n    }}\n",
                id = id,
                ty = block.type_name
            ));
        }
    }
    if with_meta {
        methods.push(
            "    pub fn meta(mut self, meta: MetaArguments) -> Self {\n        self.meta = meta;\n        self\n    }\n"
                .to_string(),
        );
    }
    for method in &methods {
        code.push_str(method);
        writeln!(code)?;
    }
    writeln!(
        code,
        "    pub fn build(self) -> Result<{}, ConfigError> {{",
        name
    )?;
    let required_lists: Vec<&NestedBlock<'_>> = nested
        .iter()
        .filter(|b| !b.schema.is_singleton() && b.schema.is_required())
        .collect();
    for block in &required_lists {
        writeln!(code, "        if self.{}.is_empty() {{", ident(block.name))?;
        writeln!(
            code,
            "            return Err(ConfigError::missing({:?}));",
            block.name
        )?;
        writeln!(code, "        }}")?;
    }
    if !required_lists.is_empty() {
        writeln!(code)?;
    }
    writeln!(code, "        Ok({} {{", name)?;
    for attr in &attrs {
        let id = ident(attr.name);
        match attr.role() {
            Role::Required => writeln!(
                code,
                "            {}: self.{}.ok_or_else(|| ConfigError::missing({:?}))?,",
                id, id, attr.name
            )?,
            _ => writeln!(code, "            {}: self.{},", id, id)?,
        }
    }
    for block in &nested {
        let id = ident(block.name);
        if block.schema.is_singleton() && block.schema.is_required() {
            writeln!(
                code,
                "            {}: self.{}.ok_or_else(|| ConfigError::missing({:?}))?,",
                id, id, block.name
            )?;
        } else {
            writeln!(code, "            {}: self.{},", id, id)?;
        }
    }
    if with_meta {
        writeln!(code, "            meta: self.meta,")?;
    }
    writeln!(code, "        }})")?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;

    // Block impl
    writeln!(code)?;
    writeln!(code, "impl Block for {} {{", name)?;
    writeln!(code, "    fn to_fields(&self) -> Fields {{")?;
    writeln!(code, "        let mut fields = Fields::new();")?;
    for attr in &attrs {
        let id = ident(attr.name);
        match attr.role() {
            Role::Required => writeln!(code, "        fields.put({:?}, &self.{});", attr.name, id)?,
            _ => writeln!(code, "        fields.put_opt({:?}, &self.{});", attr.name, id)?,
        }
    }
    for block in &nested {
        let id = ident(block.name);
        if block.schema.is_singleton() {
            if block.schema.is_required() {
                writeln!(
                    code,
                    "        fields.put_block({:?}, Some(&self.{}));",
                    block.name, id
                )?;
            } else {
                writeln!(
                    code,
                    "        fields.put_block({:?}, self.{}.as_ref());",
                    block.name, id
                )?;
            }
        } else {
            writeln!(code, "        fields.put_blocks({:?}, &self.{});", block.name, id)?;
        }
    }
    writeln!(code, "        fields")?;
    writeln!(code, "    }}")?;
    writeln!(code)?;
    writeln!(
        code,
        "    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {{"
    )?;
    writeln!(code, "        Ok(Self {{")?;
    for attr in &attrs {
        let getter = match attr.role() {
            Role::Required => "required",
            _ => "optional",
        };
        writeln!(
            code,
            "            {}: fields.{}({:?})?,",
            ident(attr.name),
            getter,
            attr.name
        )?;
    }
    for block in &nested {
        let getter = match (block.schema.is_singleton(), block.schema.is_required()) {
            (true, true) => "required_block",
            (true, false) => "block",
            (false, true) => "required_blocks",
            (false, false) => "blocks",
        };
        writeln!(
            code,
            "            {}: fields.{}({:?})?,",
            ident(block.name),
            getter,
            block.name
        )?;
    }
    if with_meta {
        writeln!(code, "            meta: MetaArguments::default(),")?;
    }
    writeln!(code, "        }})")?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;
    Ok(())
}

/// Getters, setters, resets and puts of one body, reading through `target`
fn emit_accessors(code: &mut String, body: &SchemaBlock, owner: &str, target: &str) -> Result<()> {
    for attr in attributes(body)? {
        let id = ident(attr.name);
        let name = attr.name;

        writeln!(code)?;
        if attr.object_view() {
            let view = format!("{}{}", owner, name.to_upper_camel_case());
            match &attr.cty {
                CtyType::List(_) | CtyType::Set(_) => {
                    let wraps_set = matches!(attr.cty, CtyType::Set(_));
                    writeln!(code, "    pub fn {}(&self) -> {}List {{", id, view)?;
                    writeln!(
                        code,
                        "        {}List::new({}.list({:?}, {}))",
                        view, target, name, wraps_set
                    )?;
                }
                _ => {
                    writeln!(code, "    pub fn {}(&self) -> {}OutputReference {{", id, view)?;
                    writeln!(
                        code,
                        "        {}OutputReference::new({}.object({:?}))",
                        view, target, name
                    )?;
                }
            }
            writeln!(code, "    }}")?;
            continue;
        }

        writeln!(code, "    pub fn {}(&self) -> Reference {{", id)?;
        writeln!(code, "        {}.reference({:?})", target, name)?;
        writeln!(code, "    }}")?;

        if !attr.is_settable() {
            continue;
        }
        let ty = rust_type(&attr.cty);
        writeln!(code)?;
        writeln!(code, "    pub fn {}_input(&self) -> Option<Input<{}>> {{", name, ty)?;
        writeln!(code, "        {}.input({:?})", target, name)?;
        writeln!(code, "    }}")?;
        writeln!(code)?;
        writeln!(
            code,
            "    pub fn set_{}(&self, value: impl Into<Input<{}>>) {{",
            name, ty
        )?;
        writeln!(code, "        let value: Input<{}> = value.into();", ty)?;
        writeln!(code, "        {}.set({:?}, value);", target, name)?;
        writeln!(code, "    }}")?;
        if attr.role() == Role::Optional {
            writeln!(code)?;
            writeln!(code, "    pub fn reset_{}(&self) {{", name)?;
            writeln!(code, "        {}.reset({:?});", target, name)?;
            writeln!(code, "    }}")?;
        }
    }

    for block in blocks(body, owner) {
        let id = ident(block.name);
        let name = block.name;
        let ty = &block.type_name;
        let wraps_set = block.nesting == Nesting::Set;

        writeln!(code)?;
        if block.schema.is_singleton() {
            writeln!(code, "    pub fn {}(&self) -> {}OutputReference {{", id, ty)?;
            writeln!(
                code,
                "        {}OutputReference::new({}.block({:?}, {}))",
                ty, target, name, wraps_set
            )?;
            writeln!(code, "    }}")?;
            writeln!(code)?;
            writeln!(code, "    pub fn put_{}(&self, value: &{}) {{", name, ty)?;
            writeln!(code, "        {}.put({:?}, value);", target, name)?;
            writeln!(code, "    }}")?;
            writeln!(code)?;
            writeln!(code, "    pub fn {}_input(&self) -> Option<{}> {{", name, ty)?;
            writeln!(code, "        {}.block_input({:?})", target, name)?;
            writeln!(code, "    }}")?;
        } else {
            writeln!(code, "    pub fn {}(&self) -> {}List {{", id, ty)?;
            writeln!(
                code,
                "        {}List::new({}.list({:?}, {}))",
                ty, target, name, wraps_set
            )?;
            writeln!(code, "    }}")?;
            writeln!(code)?;
            writeln!(code, "    pub fn put_{}(&self, value: &[{}]) {{", name, ty)?;
            writeln!(code, "        {}.put_all({:?}, value);", target, name)?;
            writeln!(code, "    }}")?;
            writeln!(code)?;
            writeln!(code, "    pub fn {}_input(&self) -> Option<Vec<{}>> {{", name, ty)?;
            writeln!(code, "        {}.blocks_input({:?})", target, name)?;
            writeln!(code, "    }}")?;
        }
        if !block.schema.is_required() {
            writeln!(code)?;
            writeln!(code, "    pub fn reset_{}(&self) {{", name)?;
            writeln!(code, "        {}.reset({:?});", target, name)?;
            writeln!(code, "    }}")?;
        }
    }
    Ok(())
}

fn emit_element(code: &mut String, spec: &TypeSpec<'_>) -> Result<()> {
    let name = spec.struct_name();
    let label = spec.kind.label();

    writeln!(code)?;
    writeln!(code, "/// `{}` {}", spec.tf_type, label)?;
    writeln!(code, "#[derive(Debug, Clone)]")?;
    writeln!(code, "pub struct {} {{", name)?;
    writeln!(code, "    element: ResourceHandle,")?;
    writeln!(code, "}}")?;
    writeln!(code)?;
    writeln!(code, "impl {} {{", name)?;
    writeln!(
        code,
        "    pub const TF_RESOURCE_TYPE: &'static str = {:?};",
        spec.tf_type
    )?;
    writeln!(code)?;
    writeln!(
        code,
        "    /// Register a new `{}` {} named `id` in `stack`",
        spec.tf_type, label
    )?;
    writeln!(
        code,
        "    pub fn new(stack: &mut Stack, id: &str, config: {}Config) -> Result<Self, StackError> {{",
        name
    )?;
    writeln!(code, "        let element = stack.register(")?;
    writeln!(code, "            {},", spec.kind.variant())?;
    writeln!(code, "            Self::TF_RESOURCE_TYPE,")?;
    writeln!(code, "            id,")?;
    writeln!(code, "            config.to_fields().into_map(),")?;
    writeln!(code, "            config.meta,")?;
    writeln!(code, "            schema(),")?;
    writeln!(code, "        )?;")?;
    writeln!(code, "        Ok(Self {{ element }})")?;
    writeln!(code, "    }}")?;
    writeln!(code)?;
    writeln!(code, "    /// Wrap an element already registered with this type")?;
    writeln!(code, "    pub fn from_handle(element: ResourceHandle) -> Self {{")?;
    writeln!(code, "        Self {{ element }}")?;
    writeln!(code, "    }}")?;
    writeln!(code)?;
    writeln!(code, "    fn root(&self) -> BlockRef {{")?;
    writeln!(code, "        BlockRef::root(self.element.clone())")?;
    writeln!(code, "    }}")?;
    emit_accessors(code, spec.body, &name, "self.root()")?;
    writeln!(code, "}}")?;
    writeln!(code)?;
    writeln!(code, "impl TerraformElement for {} {{", name)?;
    writeln!(code, "    fn element(&self) -> &ResourceHandle {{")?;
    writeln!(code, "        &self.element")?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;
    Ok(())
}

fn emit_output_reference(code: &mut String, block: &NestedBlock<'_>) -> Result<()> {
    let ty = &block.type_name;

    writeln!(code)?;
    writeln!(code, "/// Output reference to one `{}` block", block.name)?;
    writeln!(code, "#[derive(Debug, Clone)]")?;
    writeln!(code, "pub struct {}OutputReference {{", ty)?;
    writeln!(code, "    inner: BlockRef,")?;
    writeln!(code, "}}")?;
    writeln!(code)?;
    writeln!(code, "impl {}OutputReference {{", ty)?;
    writeln!(code, "    pub fn new(inner: BlockRef) -> Self {{")?;
    writeln!(code, "        Self {{ inner }}")?;
    writeln!(code, "    }}")?;
    writeln!(code)?;
    writeln!(code, "    pub fn internal_value(&self) -> Option<{}> {{", ty)?;
    writeln!(code, "        self.inner.internal_value()")?;
    writeln!(code, "    }}")?;
    writeln!(code)?;
    writeln!(
        code,
        "    pub fn set_internal_value(&self, value: Option<&{}>) {{",
        ty
    )?;
    writeln!(code, "        self.inner.set_internal_value(value);")?;
    writeln!(code, "    }}")?;
    emit_accessors(code, &block.schema.block, ty, "self.inner")?;
    writeln!(code, "}}")?;
    Ok(())
}

fn emit_list(code: &mut String, ty: &str, doc: &str) {
    let lines = [
        String::new(),
        format!("/// {}", doc),
        "#[derive(Debug, Clone)]".to_string(),
        format!("pub struct {}List {{", ty),
        "    inner: ListRef,".to_string(),
        "}".to_string(),
        String::new(),
        format!("impl {}List {{", ty),
        "    pub fn new(inner: ListRef) -> Self {".to_string(),
        "        Self { inner }".to_string(),
        "    }".to_string(),
        String::new(),
        "    /// View of the instance at `index`".to_string(),
        format!("    pub fn get(&self, index: usize) -> {}OutputReference {{", ty),
        format!("        {}OutputReference::new(self.inner.get(index))", ty),
        "    }".to_string(),
        String::new(),
        "    pub fn len(&self) -> usize {".to_string(),
        "        self.inner.len()".to_string(),
        "    }".to_string(),
        String::new(),
        "    pub fn is_empty(&self) -> bool {".to_string(),
        "        self.inner.is_empty()".to_string(),
        "    }".to_string(),
        String::new(),
        "    pub fn wraps_set(&self) -> bool {".to_string(),
        "        self.inner.wraps_set()".to_string(),
        "    }".to_string(),
        String::new(),
        "    pub fn reference(&self) -> Reference {".to_string(),
        "        self.inner.reference()".to_string(),
        "    }".to_string(),
        "}".to_string(),
    ];
    for line in lines {
        code.push_str(&line);
        code.push('\n');
    }
}

fn emit_object_view(code: &mut String, view: &ObjectView<'_>) {
    let ty = &view.type_name;
    let fields = view.cty.object_fields().cloned().unwrap_or_default();

    code.push_str(&format!(
        "\n/// Output reference to one `{}` entry of [`{}`]\n",
        view.name, view.owner
    ));
    code.push_str("#[derive(Debug, Clone)]\n");
    code.push_str(&format!("pub struct {}OutputReference {{\n", ty));
    code.push_str("    inner: BlockRef,\n");
    code.push_str("}\n\n");
    code.push_str(&format!("impl {}OutputReference {{\n", ty));
    code.push_str("    pub fn new(inner: BlockRef) -> Self {\n");
    code.push_str("        Self { inner }\n");
    code.push_str("    }\n");
    for name in fields.keys() {
        code.push_str(&format!(
            "\n    pub fn {}(&self) -> Reference {{\n        self.inner.reference({:?})\n    }}\n",
            ident(name),
            name
        ));
    }
    code.push_str("}\n");

    if matches!(view.cty, CtyType::List(_) | CtyType::Set(_)) {
        emit_list(code, ty, &format!("Entries of the computed `{}` attribute", view.name));
    }
}

/// `mod.rs` of a generated directory
pub fn generate_mod(kind: Kind, specs: &[TypeSpec<'_>]) -> Result<String> {
    let (label, plural) = match kind {
        Kind::Resource => ("resource", "resources"),
        Kind::DataSource => ("data source", "data sources"),
    };

    let mut code = String::new();
    writeln!(code, "//! Generated {} bindings", label)?;
    writeln!(code, "//!")?;
    writeln!(code, "//! {}", HEADER_NOTE)?;
    writeln!(code)?;
    for spec in specs {
        writeln!(code, "pub mod {};", spec.module_name())?;
    }
    writeln!(code)?;
    let imports: Vec<String> = [
        "Block",
        "Fields",
        "MetaArguments",
        "ResourceHandle",
        "ResourceKind",
        "ResourceSchema",
        "Stack",
        "TerraformElement",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    writeln!(code, "use berth_core::{{")?;
    writeln!(code, "{}", wrap_items(&imports, "    ", 100))?;
    writeln!(code, "}};")?;
    writeln!(code)?;
    writeln!(code, "/// Schemas of every generated {}", label)?;
    writeln!(code, "pub fn schemas() -> Vec<&'static ResourceSchema> {{")?;
    writeln!(code, "    vec![")?;
    for spec in specs {
        writeln!(code, "        {}::schema(),", spec.module_name())?;
    }
    writeln!(code, "    ]")?;
    writeln!(code, "}}")?;
    writeln!(code)?;
    writeln!(
        code,
        "/// Register one of the {} from its field map",
        plural
    )?;
    writeln!(code, "pub fn build(")?;
    writeln!(code, "    stack: &mut Stack,")?;
    writeln!(code, "    resource_type: &str,")?;
    writeln!(code, "    id: &str,")?;
    writeln!(code, "    fields: &Fields,")?;
    writeln!(code, "    meta: MetaArguments,")?;
    writeln!(code, ") -> berth_core::Result<ResourceHandle> {{")?;
    writeln!(code, "    match resource_type {{")?;
    for spec in specs {
        let module = spec.module_name();
        let name = spec.struct_name();
        writeln!(code, "        {}::{}::TF_RESOURCE_TYPE => {{", module, name)?;
        writeln!(
            code,
            "            let mut config = {}::{}Config::from_fields(fields)?;",
            module, name
        )?;
        writeln!(
            code,
            "            stack.check_fields(id, fields.as_map(), {}::schema())?;",
            module
        )?;
        writeln!(code, "            config.meta = meta;")?;
        writeln!(
            code,
            "            Ok({}::{}::new(stack, id, config)?.element().clone())",
            module, name
        )?;
        writeln!(code, "        }}")?;
    }
    writeln!(code, "        other => Err(berth_core::Error::UnknownType {{")?;
    writeln!(code, "            kind: {},", kind.variant())?;
    writeln!(code, "            resource_type: other.to_string(),")?;
    writeln!(code, "        }}),")?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(json: serde_json::Value) -> SchemaBlock {
        serde_json::from_value(json).unwrap()
    }

    fn cluster_body() -> SchemaBlock {
        body(json!({
            "attributes": {
                "arn": {"type": "string", "computed": true},
                "name": {"type": "string", "required": true},
                "tags": {"type": ["map", "string"], "optional": true}
            },
            "block_types": {
                "setting": {
                    "nesting_mode": "set",
                    "block": {
                        "attributes": {
                            "name": {"type": "string", "required": true},
                            "value": {"type": "string", "required": true}
                        }
                    }
                },
                "configuration": {
                    "nesting_mode": "list",
                    "max_items": 1,
                    "block": {
                        "attributes": {"type": {"type": "string", "optional": true}}
                    }
                }
            }
        }))
    }

    #[test]
    fn module_and_struct_names() {
        let b = SchemaBlock::default();
        let resource = TypeSpec {
            tf_type: "aws_ecs_cluster",
            kind: Kind::Resource,
            body: &b,
        };
        assert_eq!(resource.module_name(), "ecs_cluster");
        assert_eq!(resource.struct_name(), "EcsCluster");

        let data = TypeSpec {
            tf_type: "aws_ecs_cluster",
            kind: Kind::DataSource,
            body: &b,
        };
        assert_eq!(data.module_name(), "data_aws_ecs_cluster");
        assert_eq!(data.struct_name(), "DataAwsEcsCluster");
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(ident("type"), "r#type");
        assert_eq!(ident("value"), "value");
    }

    #[test]
    fn type_mapping() {
        assert_eq!(rust_type(&CtyType::String), "String");
        assert_eq!(rust_type(&CtyType::Set(Box::new(CtyType::String))), "Vec<String>");
        assert_eq!(
            rust_type(&CtyType::Map(Box::new(CtyType::String))),
            "BTreeMap<String, String>"
        );
        assert_eq!(rust_type(&CtyType::Map(Box::new(CtyType::Bool))), "Value");
        assert_eq!(
            attribute_type(&CtyType::List(Box::new(CtyType::Number))),
            "AttributeType::List(Box::new(AttributeType::Number))"
        );
    }

    #[test]
    fn wrap_items_breaks_long_lists() {
        let items: Vec<String> = ["Alpha", "Beta", "Gamma"].iter().map(|s| s.to_string()).collect();
        assert_eq!(wrap_items(&items, "    ", 100), "    Alpha, Beta, Gamma,");
        assert_eq!(wrap_items(&items, "    ", 16), "    Alpha, Beta,\n    Gamma,");
    }

    #[test]
    fn generated_resource_has_expected_items() {
        let b = cluster_body();
        let code = generate_type(&TypeSpec {
            tf_type: "aws_ecs_cluster",
            kind: Kind::Resource,
            body: &b,
        })
        .unwrap();

        assert!(code.starts_with("//! `aws_ecs_cluster` resource\n"));
        assert!(code.contains(HEADER_NOTE));
        assert!(code.contains("use std::collections::BTreeMap;"));
        assert!(code.contains("pub const TF_RESOURCE_TYPE: &'static str = \"aws_ecs_cluster\";"));
        assert!(code.contains(".attribute(AttributeSchema::new(\"arn\", AttributeType::String).read_only())"));
        assert!(code.contains("    pub name: Input<String>,"));
        assert!(code.contains("    pub tags: Option<Input<BTreeMap<String, String>>>,"));
        assert!(code.contains("    pub configuration: Option<EcsClusterConfiguration>,"));
        assert!(code.contains("    pub setting: Vec<EcsClusterSetting>,"));
        assert!(code.contains("name: self.name.ok_or_else(|| ConfigError::missing(\"name\"))?,"));
        assert!(code.contains("pub fn reset_tags(&self)"));
        assert!(!code.contains("pub fn reset_name(&self)"));
        assert!(!code.contains("pub fn set_arn("));
        assert!(code.contains("EcsClusterSettingList::new(self.root().list(\"setting\", true))"));
        assert!(code.contains("pub struct EcsClusterSettingList {"));
        assert!(!code.contains("pub struct EcsClusterConfigurationList {"));
        assert!(code.contains("    pub r#type: Option<Input<String>>,"));
        assert!(code.contains("pub fn set_type(&self, value: impl Into<Input<String>>)"));
    }

    #[test]
    fn computed_objects_get_read_only_views() {
        let b = body(json!({
            "attributes": {
                "cluster_name": {"type": "string", "required": true},
                "setting": {
                    "type": ["set", ["object", {"name": "string", "value": "string"}]],
                    "computed": true
                }
            }
        }));
        let code = generate_type(&TypeSpec {
            tf_type: "aws_ecs_cluster",
            kind: Kind::DataSource,
            body: &b,
        })
        .unwrap();

        assert!(code.contains("ResourceSchema::data_source(\"aws_ecs_cluster\")"));
        assert!(code.contains("ResourceKind::DataSource,"));
        assert!(code.contains("pub fn setting(&self) -> DataAwsEcsClusterSettingList {"));
        assert!(code.contains("pub struct DataAwsEcsClusterSettingOutputReference {"));
        assert!(!code.contains("pub setting:"));
    }

    #[test]
    fn unsupported_nesting_is_skipped() {
        let b = body(json!({
            "attributes": {"name": {"type": "string", "required": true}},
            "block_types": {"by_key": {"nesting_mode": "map", "block": {}}}
        }));
        let code = generate_type(&TypeSpec {
            tf_type: "aws_thing",
            kind: Kind::Resource,
            body: &b,
        })
        .unwrap();
        assert!(!code.contains("by_key"));
    }

    #[test]
    fn mod_file_lists_every_type() {
        let b = cluster_body();
        let specs = [TypeSpec {
            tf_type: "aws_ecs_cluster",
            kind: Kind::Resource,
            body: &b,
        }];
        let code = generate_mod(Kind::Resource, &specs).unwrap();
        assert!(code.contains("pub mod ecs_cluster;"));
        assert!(code.contains("ecs_cluster::schema(),"));
        assert!(code.contains("ecs_cluster::EcsCluster::TF_RESOURCE_TYPE => {"));
        assert!(code.contains("stack.check_fields(id, fields.as_map(), ecs_cluster::schema())?;"));
    }
}
