//! Stack - The scope every resource and data source is registered in
//!
//! A [`Stack`] owns the registered elements in registration order. Typed
//! bindings keep a [`ResourceHandle`] to their element and read or write
//! its attribute tree through it.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use regex::Regex;

use crate::input::{AttributeValue, Input};
use crate::meta::{Lifecycle, MetaArguments};
use crate::path::AttributePath;
use crate::resource::{Reference, Resource, ResourceId, ResourceKind, Value};
use crate::schema::{ResourceSchema, TypeError};
use crate::settings::Settings;
use crate::store::{AttributeStore, AttributeTree};

/// Errors raised while registering elements
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StackError {
    #[error("There is already an element with address {address}")]
    DuplicateId { address: String },

    #[error("Invalid logical id '{id}': must start with a letter or '_' and contain only letters, digits, '_' or '-'")]
    InvalidId { id: String },

    #[error("Validation failed for {address}:\n{}", format_errors(.errors))]
    Validation {
        address: String,
        errors: Vec<TypeError>,
    },
}

fn format_errors(errors: &[TypeError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

fn id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("id regex is valid"))
}

/// Shared handle to one registered element
///
/// Clones point at the same element, so writes through any typed wrapper
/// are visible to the stack at synthesis time.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    inner: Arc<RwLock<Resource>>,
}

impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ResourceHandle {
    pub fn new(resource: Resource) -> Self {
        Self {
            inner: Arc::new(RwLock::new(resource)),
        }
    }

    // A panic while holding the lock cannot leave the tree half-written,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Resource> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Resource> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> ResourceId {
        self.read().id.clone()
    }

    pub fn kind(&self) -> ResourceKind {
        self.read().kind
    }

    /// Terraform address, e.g. `aws_ecs_service.web`
    pub fn address(&self) -> String {
        self.read().address()
    }

    pub fn get(&self, path: &AttributePath) -> Option<Value> {
        self.read().attributes.get(path).cloned()
    }

    pub fn set(&self, path: &AttributePath, value: Value) {
        log::trace!("{}: set {}", self.address(), path);
        self.write().attributes.set(path, value);
    }

    pub fn unset(&self, path: &AttributePath) -> Option<Value> {
        log::trace!("{}: unset {}", self.address(), path);
        self.write().attributes.unset(path)
    }

    /// Reference to the attribute at `path`, resolved by the engine
    pub fn reference(&self, path: AttributePath) -> Reference {
        let resource = self.read();
        Reference::attribute(resource.kind, resource.id.clone(), path)
    }

    pub fn meta(&self) -> MetaArguments {
        self.read().meta.clone()
    }

    pub fn set_meta(&self, meta: MetaArguments) {
        self.write().meta = meta;
    }

    pub fn update_meta(&self, f: impl FnOnce(&mut MetaArguments)) {
        f(&mut self.write().meta);
    }

    /// Make this element wait for `other`
    pub fn add_depends_on(&self, other: &ResourceHandle) {
        let address = other.address();
        let mut resource = self.write();
        if !resource.meta.depends_on.contains(&address) {
            resource.meta.depends_on.push(address);
        }
    }

    /// Copy of the element as currently configured
    pub fn snapshot(&self) -> Resource {
        self.read().clone()
    }

    pub fn fields(&self) -> BTreeMap<String, Value> {
        self.read().attributes.fields().clone()
    }
}

/// Common operations of every typed resource and data source binding
pub trait TerraformElement {
    fn element(&self) -> &ResourceHandle;

    fn address(&self) -> String {
        self.element().address()
    }

    fn depends_on(&self, other: &dyn TerraformElement) {
        self.element().add_depends_on(other.element());
    }

    fn set_count<C: Into<Input<f64>>>(&self, count: C)
    where
        Self: Sized,
    {
        let count = count.into().into_value();
        self.element().update_meta(|meta| meta.count = Some(count));
    }

    fn set_for_each<F: Into<Input<Value>>>(&self, for_each: F)
    where
        Self: Sized,
    {
        let for_each = for_each.into().into_value();
        self.element()
            .update_meta(|meta| meta.for_each = Some(for_each));
    }

    fn set_provider(&self, provider: &str) {
        self.element()
            .update_meta(|meta| meta.provider = Some(provider.to_string()));
    }

    fn set_lifecycle(&self, lifecycle: Lifecycle) {
        self.element()
            .update_meta(|meta| meta.lifecycle = Some(lifecycle));
    }

    /// Reference to any attribute by name, including ones without a typed getter
    fn interpolation_for_attribute(&self, attribute: &str) -> Reference {
        self.element().reference(AttributePath::attr(attribute))
    }
}

/// Entry of `terraform.required_providers`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RequiredProvider {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Registry of the elements making up one Terraform configuration
#[derive(Debug, Default)]
pub struct Stack {
    name: String,
    settings: Settings,
    elements: Vec<ResourceHandle>,
    required_providers: BTreeMap<String, RequiredProvider>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, Settings::default())
    }

    pub fn with_settings(name: impl Into<String>, settings: Settings) -> Self {
        Self {
            name: name.into(),
            settings,
            elements: Vec::new(),
            required_providers: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Register a new element
    ///
    /// Fails when the logical id is not a valid Terraform name, when an
    /// element of the same kind and type already uses it, or, with
    /// [`Settings::type_check`] enabled, when `fields` do not match `schema`.
    pub fn register(
        &mut self,
        kind: ResourceKind,
        resource_type: &str,
        id: &str,
        fields: BTreeMap<String, Value>,
        meta: MetaArguments,
        schema: &ResourceSchema,
    ) -> Result<ResourceHandle, StackError> {
        if !id_regex().is_match(id) {
            return Err(StackError::InvalidId { id: id.to_string() });
        }

        let resource_id = ResourceId::new(resource_type, id);
        let address = resource_id.address(kind);
        if self.find(kind, resource_type, id).is_some() {
            return Err(StackError::DuplicateId { address });
        }

        if self.settings.type_check {
            schema
                .validate(&fields)
                .map_err(|errors| StackError::Validation {
                    address: address.clone(),
                    errors,
                })?;
        }

        log::debug!("registering {} ({} fields)", address, fields.len());

        let handle = ResourceHandle::new(Resource {
            id: resource_id,
            kind,
            attributes: AttributeTree::from_fields(fields),
            meta,
        });
        self.elements.push(handle.clone());
        Ok(handle)
    }

    /// Check a raw field map before a typed config is rebuilt from it
    ///
    /// With [`Settings::type_check`] enabled every schema violation is an
    /// error. Otherwise arguments the typed config cannot carry are logged,
    /// since they are left out of the element.
    pub fn check_fields(
        &self,
        id: &str,
        fields: &BTreeMap<String, Value>,
        schema: &ResourceSchema,
    ) -> Result<(), StackError> {
        let address = ResourceId::new(&schema.resource_type, id).address(schema.kind);
        if self.settings.type_check {
            return schema
                .validate(fields)
                .map_err(|errors| StackError::Validation { address, errors });
        }

        for name in fields.keys() {
            match schema.attributes.get(name) {
                Some(attr) if !attr.is_settable() => {
                    log::warn!("{}: ignoring computed attribute '{}'", address, name)
                }
                None if !schema.blocks.contains_key(name) => {
                    log::warn!("{}: ignoring unknown argument '{}'", address, name)
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Registered elements in registration order
    pub fn resources(&self) -> &[ResourceHandle] {
        &self.elements
    }

    pub fn find(&self, kind: ResourceKind, resource_type: &str, id: &str) -> Option<ResourceHandle> {
        self.elements
            .iter()
            .find(|handle| {
                let resource = handle.read();
                resource.kind == kind
                    && resource.id.resource_type == resource_type
                    && resource.id.name == id
            })
            .cloned()
    }

    /// Declare a provider under `terraform.required_providers`
    pub fn required_provider(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        version: Option<&str>,
    ) {
        self.required_providers.insert(
            name.into(),
            RequiredProvider {
                source: source.into(),
                version: version.map(str::to_string),
            },
        );
    }

    pub fn required_providers(&self) -> &BTreeMap<String, RequiredProvider> {
        &self.required_providers
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};

    fn schema() -> ResourceSchema {
        ResourceSchema::new("aws_ecs_cluster")
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
    }

    fn name_field(name: &str) -> BTreeMap<String, Value> {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields
    }

    fn register(stack: &mut Stack, id: &str) -> Result<ResourceHandle, StackError> {
        stack.register(
            ResourceKind::Resource,
            "aws_ecs_cluster",
            id,
            name_field(id),
            MetaArguments::default(),
            &schema(),
        )
    }

    #[test]
    fn register_and_find() {
        let mut stack = Stack::new("app");
        let handle = register(&mut stack, "main").unwrap();
        assert_eq!(handle.address(), "aws_ecs_cluster.main");
        assert_eq!(
            stack.find(ResourceKind::Resource, "aws_ecs_cluster", "main"),
            Some(handle)
        );
        assert_eq!(
            stack.find(ResourceKind::DataSource, "aws_ecs_cluster", "main"),
            None
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut stack = Stack::new("app");
        register(&mut stack, "main").unwrap();
        assert_eq!(
            register(&mut stack, "main"),
            Err(StackError::DuplicateId {
                address: "aws_ecs_cluster.main".to_string()
            })
        );
    }

    #[test]
    fn same_id_allowed_for_data_source() {
        let mut stack = Stack::new("app");
        register(&mut stack, "main").unwrap();
        let data = stack.register(
            ResourceKind::DataSource,
            "aws_ecs_cluster",
            "main",
            BTreeMap::new(),
            MetaArguments::default(),
            &ResourceSchema::data_source("aws_ecs_cluster"),
        );
        assert!(data.is_ok());
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn invalid_ids_are_rejected() {
        let mut stack = Stack::new("app");
        for id in ["", "1st", "has space", "dot.ted"] {
            assert!(matches!(
                register(&mut stack, id),
                Err(StackError::InvalidId { .. })
            ));
        }
        assert!(register(&mut stack, "_web-1").is_ok());
    }

    #[test]
    fn type_check_validates_on_register() {
        let mut stack = Stack::with_settings("app", Settings::default().type_check(true));
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::Number(1.0));
        let err = stack
            .register(
                ResourceKind::Resource,
                "aws_ecs_cluster",
                "main",
                fields,
                MetaArguments::default(),
                &schema(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("aws_ecs_cluster.main"));
        assert!(stack.is_empty());
    }

    #[test]
    fn check_fields_follows_type_check() {
        let mut fields = name_field("demo");
        fields.insert("bogus".to_string(), Value::Bool(true));

        let lenient = Stack::new("app");
        assert!(lenient.check_fields("main", &fields, &schema()).is_ok());

        let strict = Stack::with_settings("app", Settings::default().type_check(true));
        let err = strict.check_fields("main", &fields, &schema()).unwrap_err();
        assert_eq!(
            err,
            StackError::Validation {
                address: "aws_ecs_cluster.main".to_string(),
                errors: vec![TypeError::UnknownAttribute {
                    name: "bogus".to_string()
                }],
            }
        );
    }

    #[test]
    fn handles_share_state() {
        let mut stack = Stack::new("app");
        let handle = register(&mut stack, "main").unwrap();
        let other = handle.clone();
        other.set(&AttributePath::attr("name"), Value::String("renamed".to_string()));
        assert_eq!(
            stack.resources()[0].get(&AttributePath::attr("name")),
            Some(Value::String("renamed".to_string()))
        );
    }

    #[test]
    fn depends_on_is_deduplicated() {
        let mut stack = Stack::new("app");
        let a = register(&mut stack, "a").unwrap();
        let b = register(&mut stack, "b").unwrap();
        b.add_depends_on(&a);
        b.add_depends_on(&a);
        assert_eq!(b.meta().depends_on, vec!["aws_ecs_cluster.a".to_string()]);
    }

    #[test]
    fn reference_uses_element_address() {
        let mut stack = Stack::new("app");
        let handle = register(&mut stack, "main").unwrap();
        assert_eq!(
            handle.reference(AttributePath::attr("arn")).to_string(),
            "${aws_ecs_cluster.main.arn}"
        );
    }
}
