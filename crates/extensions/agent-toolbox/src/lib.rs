//! Toolbox agent tools for opsbox.
//!
//! The tools the conversation agent can call:
//!
//! - `calculate`: sandboxed arithmetic, because models are unreliable
//!   at mental math
//! - `list_skills` / `read_skill`: discover and read task instructions
//! - `list_facts` / `read_fact`: discover and read reference material
//!
//! ## Usage by the agent
//!
//! 1. Call `list_skills` or `list_facts` to see what is available
//! 2. Call `read_skill` / `read_fact` with a listed path for the content
//! 3. Call `calculate` for any numeric computation
//!
//! [`ToolboxExtension`] registers the five tools and the external API
//! service descriptor the host's pass-through network tools use.

mod calculate;
mod doc_list;
mod doc_read;
mod extension;

pub use calculate::CalculateTool;
pub use doc_list::DocListTool;
pub use doc_read::DocReadTool;
pub use extension::ToolboxExtension;
