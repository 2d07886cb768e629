//! Operator-overload resolution.
//!
//! A binary operator may be backed by user functions. Resolution is purely
//! type based: a candidate fits when it takes exactly two parameters that
//! accept the operand types. The candidate order is kept for reporting only.

use crate::table::TypesTable;
use parser::Type;
use tracing::trace;

/// The single implementation chosen for an operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload<'a> {
    /// Position in the candidate list
    pub index: usize,
    pub name: &'a str,
    pub ret: Type,
}

/// Find the one candidate that accepts `(left, right)`.
///
/// Returns `None` when no candidate fits and also when more than one distinct
/// candidate fits. Listing the same function twice counts once.
pub fn find_suitable_operator_overload<'a>(
    candidates: &'a [String],
    types: &TypesTable,
    left: &Type,
    right: &Type,
) -> Option<Overload<'a>> {
    let mut found: Option<Overload<'a>> = None;

    for (index, name) in candidates.iter().enumerate() {
        let Some(signature) = types.function(name) else {
            continue;
        };
        if !signature.accepts(&[left, right]) {
            continue;
        }

        if let Some(prev) = &found {
            if prev.name != name.as_str() {
                trace!(
                    first = prev.name,
                    second = name.as_str(),
                    %left,
                    %right,
                    "ambiguous operator overload"
                );
                return None;
            }
            continue;
        }

        found = Some(Overload {
            index,
            name: name.as_str(),
            ret: signature.ret.clone(),
        });
    }

    found
}
