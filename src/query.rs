//! Bound query expressions and their SQL and wire forms.
crate::reexport!(expr);
crate::reexport!(compile);
crate::reexport!(wire);
crate::reexport!(verify);
