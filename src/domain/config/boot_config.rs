//! Bootstrapper configuration models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, BootSequence, Step};

/// Configuration loaded from `entrykit.toml`. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl BootConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.app.validate()?;
        self.gateway.validate()?;
        Ok(())
    }
}

/// App Bootstrapper settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Command prefix for the management CLI, e.g. `python manage.py`.
    #[serde(default = "default_manager")]
    pub manager: Vec<String>,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { manager: default_manager(), server: ServerConfig::default() }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.manager.first().is_none_or(|program| program.is_empty()) {
            return Err(AppError::config_error("app.manager must name a program"));
        }
        self.server.validate()
    }

    /// wait-for-db, collect-static, migrate, then hand off to the server.
    pub fn sequence(&self) -> BootSequence {
        BootSequence::builder("app")
            .step(self.manage_step("wait-for-db", &["wait_for_db"]))
            .step(self.manage_step("collect-static", &["collectstatic", "--noinput"]))
            .step(self.manage_step("migrate", &["migrate"]))
            .hand_off_to(self.server.step())
    }

    fn manage_step(&self, label: &str, subcommand: &[&str]) -> Step {
        let (program, prefix) = match self.manager.split_first() {
            Some((program, prefix)) => (program.as_str(), prefix),
            None => ("", &[][..]),
        };
        let args = prefix.iter().map(String::as_str).chain(subcommand.iter().copied());
        Step::run(label, program, args)
    }
}

/// Multi-worker application server (uWSGI) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_server_program")]
    pub program: String,
    #[serde(default = "default_socket")]
    pub socket: String,
    #[serde(default = "default_workers")]
    pub workers: u32,
    #[serde(default = "default_true")]
    pub master: bool,
    #[serde(default = "default_true")]
    pub enable_threads: bool,
    /// WSGI entry point module.
    #[serde(default = "default_module")]
    pub module: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program: default_server_program(),
            socket: default_socket(),
            workers: default_workers(),
            master: true,
            enable_threads: true,
            module: default_module(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.is_empty() {
            return Err(AppError::config_error("app.server.program must not be empty"));
        }
        if self.workers == 0 {
            return Err(AppError::config_error("app.server.workers must be greater than 0"));
        }
        if self.module.is_empty() {
            return Err(AppError::config_error("app.server.module must not be empty"));
        }
        Ok(())
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "--socket".to_string(),
            self.socket.clone(),
            "--workers".to_string(),
            self.workers.to_string(),
        ];
        if self.master {
            args.push("--master".to_string());
        }
        if self.enable_threads {
            args.push("--enable-threads".to_string());
        }
        args.push("--module".to_string());
        args.push(self.module.clone());
        args
    }

    fn step(&self) -> Step {
        Step::hand_off("serve", self.program.as_str(), self.args())
    }
}

/// Gateway Bootstrapper (nginx) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    #[serde(default = "default_template")]
    pub template: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_gateway_program")]
    pub program: String,
    #[serde(default = "default_gateway_args")]
    pub args: Vec<String>,
    /// Restrict substitution to these variables. Empty substitutes all.
    #[serde(default)]
    pub variables: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
            program: default_gateway_program(),
            args: default_gateway_args(),
            variables: Vec::new(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.is_empty() {
            return Err(AppError::config_error("gateway.program must not be empty"));
        }
        Ok(())
    }

    pub fn server_step(&self) -> Step {
        Step::hand_off("serve", self.program.as_str(), self.args.iter().map(String::as_str))
    }
}

fn default_manager() -> Vec<String> {
    vec!["python".to_string(), "manage.py".to_string()]
}

fn default_server_program() -> String {
    "uwsgi".to_string()
}

fn default_socket() -> String {
    ":9000".to_string()
}

fn default_workers() -> u32 {
    4
}

fn default_true() -> bool {
    true
}

fn default_module() -> String {
    "app.wsgi".to_string()
}

fn default_template() -> PathBuf {
    PathBuf::from("/etc/nginx/default.conf.tpl")
}

fn default_output() -> PathBuf {
    PathBuf::from("/etc/nginx/conf.d/default.conf")
}

fn default_gateway_program() -> String {
    "nginx".to_string()
}

fn default_gateway_args() -> Vec<String> {
    vec!["-g".to_string(), "daemon off;".to_string()]
}
