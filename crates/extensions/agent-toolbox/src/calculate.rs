//! Calculate tool - sandboxed arithmetic for the agent.

use async_trait::async_trait;
use serde::Deserialize;

use opsbox_core::eval::ExpressionEvaluator;
use opsbox_protocols::error::ToolError;
use opsbox_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

#[derive(Debug, Deserialize)]
struct CalculateParams {
    /// The expression to evaluate.
    expression: String,
}

/// Tool for evaluating mathematical expressions.
///
/// Language models are unreliable at arithmetic, so the agent is told to
/// route every numeric computation through this tool. Evaluation runs in
/// a closed expression language; an invalid expression comes back as a
/// readable error string the model can correct and retry.
pub struct CalculateTool {
    definition: ToolDefinition,
    evaluator: ExpressionEvaluator,
}

impl CalculateTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "A math expression, e.g. \"sqrt(16) + 2**3\", \"sin(pi/2)\", \"(100 * 15) / 100\""
                }
            },
            "required": ["expression"]
        });

        Self {
            definition: ToolDefinition::new(
                "calculate",
                "Calculate",
                "Safely evaluate a mathematical expression. Use this whenever you need to \
                 perform a calculation; do not compute numbers yourself. Supports +, -, *, /, \
                 //, %, ** and comparisons; functions abs, round, min, max, sum, pow, sqrt, \
                 sin, cos, tan, log, log10, log2, exp, floor, ceil, factorial, gcd, degrees, \
                 radians; constants pi, e, tau, inf.",
            )
            .with_parameters_schema(schema),
            evaluator: ExpressionEvaluator::new(),
        }
    }
}

impl Default for CalculateTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CalculateTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: CalculateParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.evaluator.evaluate(&params.expression) {
            Ok(value) => Ok(ToolResult::success(value.to_string())),
            Err(e) => Ok(ToolResult::error(format!("Calculation error: {}", e))),
        }
    }
}
