//! Suggests what may be typed next in a partial query.
crate::reexport!(prefix);
crate::reexport!(cursor);
crate::reexport!(suggestion);
crate::reexport!(engine);
crate::reexport!(engine_tests, test);
