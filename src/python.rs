use crate::generator::{DEFAULT_PROMPT, Generator};
use crate::scenario::ArtifactFormat;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn coerce_prompt(prompt: Option<&Bound<'_, PyAny>>) -> String {
    prompt
        .and_then(|p| p.extract::<String>().ok())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
}

fn parse_format(name: &str) -> PyResult<ArtifactFormat> {
    ArtifactFormat::ALL
        .into_iter()
        .find(|f| f.to_string() == name || f.extension() == name)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown artifact format '{}'", name)))
}

/// A configured scenario generator.
///
/// Keeps its vocabulary and format set between calls, so repeated
/// generation avoids rebuilding the keyword automaton.
#[pyclass(name = "ScenarioGenerator")]
struct ScenarioGeneratorPy {
    generator: Generator,
}

#[pymethods]
impl ScenarioGeneratorPy {
    /// Creates a generator.
    ///
    /// Args:
    ///     formats (list[str] | None): Artifact formats to render, among
    ///         "json", "yaml", "mermaid" and "text". Defaults to all four.
    ///     condition_limit (int): Maximum length of a condition clause.
    ///
    /// Raises:
    ///     ValueError: If a format is unknown or the configuration is invalid.
    #[new]
    #[pyo3(signature = (formats=None, condition_limit=80))]
    fn new(formats: Option<Vec<String>>, condition_limit: usize) -> PyResult<Self> {
        let mut builder = Generator::builder().with_condition_limit(condition_limit);
        if let Some(names) = formats {
            let formats = names
                .iter()
                .map(|n| parse_format(n))
                .collect::<PyResult<Vec<_>>>()?;
            builder = builder.with_formats(formats);
        }
        let generator = builder
            .build()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { generator })
    }

    /// Generates a scenario and returns it as a JSON string.
    #[pyo3(signature = (prompt=None))]
    fn generate(&self, prompt: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
        let scenario = self.generator.generate(&coerce_prompt(prompt));
        serde_json::to_string(&scenario).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }
}

/// Generates a scenario with the default generator and returns it as JSON.
///
/// Non-string prompts are replaced by the default prompt.
#[pyfunction]
#[pyo3(signature = (prompt=None))]
fn generate(prompt: Option<&Bound<'_, PyAny>>) -> PyResult<String> {
    let scenario = crate::generate(&coerce_prompt(prompt));
    serde_json::to_string(&scenario).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Deterministic prompt-to-scenario generation for automation pipelines.
#[pymodule]
fn scenario_forge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ScenarioGeneratorPy>()?;
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add("DEFAULT_PROMPT", DEFAULT_PROMPT)?;
    Ok(())
}
