//! Function prototypes to be mangled.

use smallvec::SmallVec;

use crate::pool::TypePool;
use crate::type_id::TypeId;

/// Text standing in for the name of the null descriptor.
pub const NULL_FUNCTION_STRING: &str = "<invalid>";

/// A function name and its ordered parameter types.
///
/// Parameter order is declaration order and mangling order. The same
/// `TypeId` may appear more than once; later occurrences of a pointer or
/// user-defined node are then encoded as substitutions.
///
/// The default value is the null descriptor, which has an empty name and
/// stands for "no function".
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDescriptor {
    name: String,
    params: SmallVec<[TypeId; 8]>,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, params: impl IntoIterator<Item = TypeId>) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    /// The null descriptor.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.name.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[TypeId] {
        &self.params
    }

    /// Append a parameter.
    pub fn push_param(&mut self, param: TypeId) {
        self.params.push(param);
    }

    /// Append a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: TypeId) -> Self {
        self.push_param(param);
        self
    }

    /// Render the prototype as `name(param, ...)`.
    pub fn display(&self, pool: &TypePool) -> String {
        if self.is_null() {
            return NULL_FUNCTION_STRING.to_string();
        }

        let mut buf = String::with_capacity(self.name.len() + 16 * self.params.len());
        buf.push_str(&self.name);
        buf.push('(');
        for (i, &param) in self.params.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            pool.format_type_into(param, &mut buf);
        }
        buf.push(')');
        buf
    }
}
