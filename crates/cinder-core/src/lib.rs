pub mod abi;
pub mod artifact;
pub mod bytecode;
pub mod emit;
pub mod error;

pub use abi::Abi;
pub use artifact::{
    ArtifactEntry, ArtifactLoader, ArtifactSet, BytecodeObject, ContractArtifact,
    FileSystemArtifactLoader, LoadedArtifact,
};
pub use bytecode::Bytecode;
pub use emit::{
    generate_bytecode_module, render_bytecode_module, render_reexport_module, write_module,
    TypeReexport, HEX_STRING_TYPE,
};
pub use error::{Error, Result};
