//! Meta - Engine meta-arguments shared by every resource and data source
//!
//! These are never interpreted here; they are carried along and written
//! out next to the element's own arguments at synthesis time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::{AttributeValue, Input};
use crate::resource::{ResourceKind, Value};

/// Meta-arguments accepted by every element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaArguments {
    /// Addresses of elements this one must wait for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_each: Option<Value>,

    /// Provider configuration reference, e.g. `aws.west`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,

    #[serde(
        default,
        rename = "provisioner",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub provisioners: Vec<Provisioner>,
}

impl MetaArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depends_on(mut self, address: impl Into<String>) -> Self {
        self.depends_on.push(address.into());
        self
    }

    pub fn count(mut self, count: impl Into<Input<f64>>) -> Self {
        self.count = Some(count.into().into_value());
        self
    }

    pub fn for_each(mut self, for_each: impl Into<Input<Value>>) -> Self {
        self.for_each = Some(for_each.into().into_value());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn provisioner(mut self, provisioner: Provisioner) -> Self {
        self.provisioners.push(provisioner);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// JSON object merged into the element body
    ///
    /// Data sources accept neither connections nor provisioners, so both
    /// are left out for them.
    pub fn to_json(
        &self,
        kind: ResourceKind,
    ) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        let mut meta = self.clone();
        if kind == ResourceKind::DataSource {
            if meta.connection.is_some() || !meta.provisioners.is_empty() {
                log::warn!("dropping connection and provisioners from a data source");
            }
            meta.connection = None;
            meta.provisioners.clear();
        }

        match serde_json::to_value(&meta)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Ok(serde_json::Map::new()),
        }
    }
}

/// `lifecycle` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_before_destroy: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevent_destroy: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_changes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replace_triggered_by: Vec<String>,
}

/// How provisioners reach the created machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// `ssh` or `winrm`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl Connection {
    pub fn ssh(host: impl Into<String>) -> Self {
        Self {
            kind: Some("ssh".to_string()),
            host: host.into(),
            user: None,
            password: None,
            port: None,
            private_key: None,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Provisioner {
    #[serde(rename = "local-exec")]
    LocalExec {
        command: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        working_dir: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        interpreter: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        environment: BTreeMap<String, String>,
    },

    #[serde(rename = "remote-exec")]
    RemoteExec {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        inline: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        scripts: Vec<String>,
    },

    #[serde(rename = "file")]
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        destination: String,
    },
}

impl Provisioner {
    pub fn local_exec(command: impl Into<String>) -> Self {
        Provisioner::LocalExec {
            command: command.into(),
            working_dir: None,
            interpreter: Vec::new(),
            environment: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Reference;
    use serde_json::json;

    #[test]
    fn empty_meta_serializes_to_nothing() {
        let meta = MetaArguments::default();
        assert!(meta.is_empty());
        assert!(meta.to_json(ResourceKind::Resource).unwrap().is_empty());
    }

    #[test]
    fn meta_arguments_use_terraform_keys() {
        let meta = MetaArguments::new()
            .depends_on("aws_ecs_cluster.main")
            .count(2)
            .provider("aws.west")
            .lifecycle(Lifecycle {
                create_before_destroy: Some(true),
                ignore_changes: vec!["desired_count".to_string()],
                ..Default::default()
            })
            .provisioner(Provisioner::local_exec("echo done"));

        let json = serde_json::Value::Object(meta.to_json(ResourceKind::Resource).unwrap());
        assert_eq!(
            json,
            json!({
                "depends_on": ["aws_ecs_cluster.main"],
                "count": 2,
                "provider": "aws.west",
                "lifecycle": {
                    "create_before_destroy": true,
                    "ignore_changes": ["desired_count"]
                },
                "provisioner": [{"local-exec": {"command": "echo done"}}]
            })
        );
    }

    #[test]
    fn deferred_count_renders_interpolation() {
        let meta = MetaArguments::new().count(Reference::raw("var.replicas"));
        let json = meta.to_json(ResourceKind::Resource).unwrap();
        assert_eq!(json["count"], json!("${var.replicas}"));
    }

    #[test]
    fn data_sources_drop_connection_and_provisioners() {
        let meta = MetaArguments::new()
            .connection(Connection::ssh("10.0.0.1"))
            .provisioner(Provisioner::local_exec("true"))
            .depends_on("aws_ecs_cluster.main");

        let resource = meta.to_json(ResourceKind::Resource).unwrap();
        assert!(resource.contains_key("connection"));
        assert_eq!(resource["connection"]["type"], json!("ssh"));

        let data = meta.to_json(ResourceKind::DataSource).unwrap();
        assert!(!data.contains_key("connection"));
        assert!(!data.contains_key("provisioner"));
        assert!(data.contains_key("depends_on"));
    }

    #[test]
    fn deserializes_from_stack_description() {
        let meta: MetaArguments = serde_json::from_value(json!({
            "depends_on": ["aws_ecs_cluster.main"],
            "provisioner": [{"file": {"content": "x", "destination": "/tmp/x"}}]
        }))
        .unwrap();
        assert_eq!(meta.depends_on, vec!["aws_ecs_cluster.main".to_string()]);
        assert!(matches!(meta.provisioners[0], Provisioner::File { .. }));
    }
}
