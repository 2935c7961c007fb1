use serde::{Deserialize, Serialize};
use std::fmt;

/// 單一路由，可附帶 HTTP 動詞
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uri {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
}

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            verb: None,
        }
    }

    pub fn with_verb(uri: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            verb: Some(verb.into()),
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verb {
            Some(verb) => write!(f, "{} {}", verb, self.uri),
            None => f.write_str(&self.uri),
        }
    }
}

/// Renders a Uri list the way it is keyed and logged: `a, b, c`.
pub fn join_uris(uris: &[Uri]) -> String {
    uris.iter()
        .map(Uri::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 控制器上一個有文件的操作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub javadoc: String,
    #[serde(default)]
    pub uris: Vec<Uri>,
    /// Parameter documentation, passed through untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<serde_json::Value>,
    /// Return documentation, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<serde_json::Value>,
}

impl Method {
    pub fn new(name: impl Into<String>, uris: Vec<Uri>) -> Self {
        Self {
            name: name.into(),
            javadoc: String::new(),
            uris,
            params: Vec::new(),
            returns: None,
        }
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = javadoc.into();
        self
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, join_uris(&self.uris))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Controller {
    pub fn new(type_name: impl Into<String>, javadoc: impl Into<String>, methods: Vec<Method>) -> Self {
        Self {
            type_name: type_name.into(),
            javadoc: Some(javadoc.into()),
            methods,
        }
    }

    /// 只保留指定方法的同型別控制器
    pub fn narrowed<I>(&self, methods: I) -> Controller
    where
        I: IntoIterator<Item = Method>,
    {
        Controller {
            type_name: self.type_name.clone(),
            javadoc: self.javadoc.clone(),
            methods: methods.into_iter().collect(),
        }
    }
}

/// A synthesized documentation unit: every method answering one Uri set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub identifier: u32,
    pub uris: Vec<Uri>,
    pub controller: Controller,
}

impl Service {
    pub fn new(identifier: u32, uris: Vec<Uri>, controller: Controller) -> Self {
        Self {
            identifier,
            uris,
            controller,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSummary {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl ControllerSummary {
    pub fn new(type_name: impl Into<String>, javadoc: Option<String>) -> Self {
        Self {
            type_name: type_name.into(),
            javadoc,
            services: Vec::new(),
        }
    }

    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }
}

/// 一次建置產生的完整目錄
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Services {
    #[serde(default)]
    pub controllers: Vec<ControllerSummary>,
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_controller(&mut self, controller: ControllerSummary) {
        self.controllers.push(controller);
    }

    pub fn controller(&self, type_name: &str) -> Option<&ControllerSummary> {
        self.controllers.iter().find(|c| c.type_name == type_name)
    }

    pub fn service_count(&self) -> usize {
        self.controllers.iter().map(|c| c.services.len()).sum()
    }
}

/// What grouping does when one Uri set is reachable from two controllers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    #[default]
    Error,
    LastWins,
}
