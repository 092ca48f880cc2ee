//! Tool definitions for the agent: the closed set of tools, their typed
//! inputs, the registry the model's tool list is built from, and the error
//! type produced at the dispatch boundary.

pub mod error;
pub mod input;
pub mod tool;
pub mod tool_registry;

pub use error::{DispatchError, RegistryError};
pub use input::{
    CreateWalletInput, GetMarketPriceInput, GetWalletBalanceInput, PlaceTradeInput, PlayDiceInput,
    RegisterDomainInput, SearchDomainsInput, ToolInput,
};
pub use tool::{ToolKind, ToolResult, ToolSpec};
pub use tool_registry::ToolRegistry;
