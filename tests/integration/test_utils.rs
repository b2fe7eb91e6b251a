//! Shared test utilities for integration tests
//!
//! Isolated XDG/HOME environments, fixture documents, and a handle on the
//! compiled binary.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes environment variable access across tests in this binary.
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

struct EnvState {
    vars: Vec<(&'static str, Option<String>)>,
}

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "XDG_STATE_HOME",
    "CLAWMERGE__DEFAULTS__PROVIDER",
    "CLAWMERGE__DEFAULTS__BACKUP",
    "CLAWMERGE__DEFAULTS__STRATEGY",
];

impl EnvState {
    fn capture() -> Self {
        Self {
            vars: ISOLATED_VARS
                .iter()
                .map(|k| (*k, std::env::var(k).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (k, v) in self.vars {
            match v {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }
    }
}

/// Run `f` with HOME and XDG_* pointed into `test_dir` and no CLAWMERGE__* overrides.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let home = test_dir.path().join("home");
    let config_home = test_dir.path().join("config");
    let state_home = test_dir.path().join("state");
    for dir in [&home, &config_home, &state_home] {
        std::fs::create_dir_all(dir).unwrap();
    }

    for k in ISOLATED_VARS {
        std::env::remove_var(k);
    }
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);
    std::env::set_var("XDG_STATE_HOME", &state_home);

    let result = f();
    env_state.restore();
    result
}

/// Build a `clawmerge` command with an isolated environment rooted at `test_dir`.
pub fn clawmerge(test_dir: &TempDir) -> Command {
    let home = test_dir.path().join("home");
    let config_home = test_dir.path().join("config");
    let state_home = test_dir.path().join("state");
    for dir in [&home, &config_home, &state_home] {
        std::fs::create_dir_all(dir).unwrap();
    }

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clawmerge"));
    cmd.env("HOME", &home)
        .env("XDG_CONFIG_HOME", &config_home)
        .env("XDG_STATE_HOME", &state_home)
        .env("NO_COLOR", "1")
        .env_remove("CLAWMERGE_LOG")
        .env_remove("CLAWMERGE_LOG_OUTPUT")
        .env_remove("CLAWMERGE__DEFAULTS__PROVIDER")
        .env_remove("CLAWMERGE__DEFAULTS__BACKUP")
        .env_remove("CLAWMERGE__DEFAULTS__STRATEGY");
    cmd
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap() + "\n").unwrap();
    path
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// A vendor fragment shaped like the published Ollama cloud config.
pub fn vendor_fragment() -> Value {
    json!({
        "models": {
            "providers": {
                "ollama": {
                    "baseUrl": "https://ollama.com/v1",
                    "apiKey": "ollama",
                    "api": "openai-completions",
                    "models": [
                        {
                            "id": "qwen3-coder:480b",
                            "name": "Qwen3 Coder 480B",
                            "reasoning": false,
                            "input": ["text"],
                            "cost": {"input": 0, "output": 0, "cacheRead": 0, "cacheWrite": 0},
                            "contextWindow": 262144,
                            "maxTokens": 65536
                        },
                        {
                            "id": "gpt-oss:120b",
                            "name": "GPT-OSS 120B",
                            "reasoning": true,
                            "input": ["text"],
                            "cost": {"input": 0, "output": 0, "cacheRead": 0, "cacheWrite": 0},
                            "contextWindow": 131072,
                            "maxTokens": 32768
                        }
                    ]
                }
            }
        },
        "agents": {
            "defaults": {
                "model": {
                    "primary": "ollama/qwen3-coder:480b",
                    "fallbacks": ["ollama/gpt-oss:120b"]
                },
                "models": {
                    "ollama/qwen3-coder:480b": {"alias": "coder"},
                    "ollama/gpt-oss:120b": {"alias": "oss"}
                }
            }
        }
    })
}

/// A user config as `openclaw doctor` leaves it, plus unrelated settings.
pub fn user_config() -> Value {
    json!({
        "gateway": {"port": 18789, "mode": "local"},
        "models": {
            "providers": {
                "anthropic": {"baseUrl": "https://api.anthropic.com", "models": []}
            }
        },
        "agents": {
            "defaults": {
                "model": {"primary": "anthropic/claude"},
                "workspace": "~/openclaw"
            }
        }
    })
}
