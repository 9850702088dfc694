//! Human-readable type rendering for diagnostics.
//!
//! This is the OpenCL C spelling (`volatile __global atomic_int *`), not the
//! mangled form.

use std::fmt::Write;

use super::{TypeData, TypePool};
use crate::{Primitive, TypeId};

impl TypePool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, id: TypeId) -> String {
        let mut buf = String::new();
        self.format_type_into(id, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, id: TypeId, buf: &mut String) {
        match self.data(id) {
            TypeData::Primitive(kind) => buf.push_str(kind.readable()),
            TypeData::Pointer {
                pointee,
                address_space,
                qualifiers,
            } => {
                for qualifier in qualifiers.iter_canonical() {
                    buf.push_str(qualifier.readable());
                    buf.push(' ');
                }
                buf.push_str(address_space.readable());
                buf.push(' ');
                self.format_type_into(*pointee, buf);
                buf.push_str(" *");
            }
            TypeData::Vector { element, length } => {
                self.format_type_into(*element, buf);
                let _ = write!(buf, "{length}");
            }
            TypeData::Atomic { base } => {
                buf.push_str("atomic_");
                self.format_type_into(*base, buf);
            }
            TypeData::Block { params } => {
                buf.push_str("void (");
                if params.is_empty() {
                    buf.push_str(Primitive::Void.readable());
                }
                for (i, &param) in params.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(param, buf);
                }
                buf.push_str(")*");
            }
            TypeData::UserDefined { name } => buf.push_str(name),
        }
    }
}
