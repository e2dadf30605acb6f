//! # Generator Module
//!
//! Turns resolved service declarations into client interface source files.
//!
//! ```text
//! SymbolTable → MarkerCatalog::resolve → build_services → synthesize → write
//! ```
//!
//! Each qualifying declaration `EmployeesController` yields
//! `IEmployeesController.generated.cs`:
//!
//! ```text
//! using RestEase;
//!
//! namespace Sample.Controllers
//! {
//! 	[BasePath("Employees")]
//! 	public interface IEmployeesController
//! 	{
//!
//! 		[Get("{id}")]
//! 		global::System.Threading.Tasks.Task<global::Sample.Employee> GetEmployee([Path] int id);
//! 	}
//! }
//! ```
//!
//! The layout lives in `templates/interface.cs.txt` (Askama). Rendering is
//! deterministic, so an artifact whose content already matches the file on
//! disk is left alone.

mod project;
mod synth;
mod templates;

pub use project::*;
pub use synth::*;
pub use templates::*;
