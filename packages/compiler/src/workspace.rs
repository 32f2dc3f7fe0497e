//! Block Workspace Model
//!
//! Read-only view of the visual editor's block graph. Blocks live in a table
//! keyed by id and refer to each other by id, so the generator can detect
//! dangling links and cycles instead of trusting the graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type BlockId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Socket holding a value-producing block.
    Value,
    /// Socket holding a nested statement chain.
    Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,
    pub kind: InputKind,
    #[serde(default)]
    pub block: Option<BlockId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    /// Type tag selecting the emission rule.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub next: Option<BlockId>,
    /// The block has an output connection, i.e. it produces a value.
    #[serde(default)]
    pub output: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Parameter names declared by procedure definitions.
    #[serde(default)]
    pub params: Vec<String>,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Block {
            id: id.into(),
            kind: kind.into(),
            fields: IndexMap::new(),
            inputs: Vec::new(),
            next: None,
            output: false,
            comment: None,
            params: Vec::new(),
        }
    }

    /// Mark the block as value-producing.
    pub fn with_output(mut self) -> Self {
        self.output = true;
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn value(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.input(name, InputKind::Value, Some(target.into()))
    }

    pub fn statement(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.input(name, InputKind::Statement, Some(target.into()))
    }

    pub fn input(mut self, name: impl Into<String>, kind: InputKind, target: Option<String>) -> Self {
        self.inputs.push(Input {
            name: name.into(),
            kind,
            block: target,
        });
        self
    }

    pub fn next(mut self, target: impl Into<String>) -> Self {
        self.next = Some(target.into());
        self
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn get_input(&self, name: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.name == name)
    }

    /// Id of the block plugged into the named socket, if any.
    pub fn input_target(&self, name: &str) -> Option<&str> {
        self.get_input(name).and_then(|input| input.block.as_deref())
    }

    /// Ids of the connected value sockets, in socket order.
    pub fn value_targets(&self) -> impl Iterator<Item = &str> {
        self.inputs
            .iter()
            .filter(|input| input.kind == InputKind::Value)
            .filter_map(|input| input.block.as_deref())
    }

    /// Number of sockets named `<prefix><n>` for consecutive n starting at 0.
    pub fn numbered_inputs(&self, prefix: &str) -> usize {
        (0..)
            .take_while(|n| self.get_input(&format!("{}{}", prefix, n)).is_some())
            .count()
    }
}

/// A variable declared in the workspace together with its coarse source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableBinding {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default)]
    pub blocks: IndexMap<BlockId, Block>,
    /// Root blocks in workspace order. `None` is a caller error.
    pub top_blocks: Option<Vec<BlockId>>,
    #[serde(default)]
    pub variables: Vec<VariableBinding>,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            blocks: IndexMap::new(),
            top_blocks: Some(Vec::new()),
            variables: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.insert(block.id.clone(), block);
        self
    }

    /// Append a root block id.
    pub fn with_top(mut self, id: impl Into<String>) -> Self {
        self.top_blocks.get_or_insert_with(Vec::new).push(id.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, type_tag: Option<&str>) -> Self {
        self.variables.push(VariableBinding {
            name: name.into(),
            type_tag: type_tag.map(str::to_string),
        });
        self
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
