/*!
General callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use crate::structures::{dependency::FunctionalDependency, source::DependencySource};

use super::Context;

/// Polled during a closure, which stops if `true` is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// Called with each dependency added to the working collection of a closure, and the rule by which the dependency was obtained.
pub type CallbackOnDerivation = dyn FnMut(&FunctionalDependency, DependencySource);

impl Context {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_callback_derivation(&mut self, callback: Box<CallbackOnDerivation>) {
        self.callback_derivation = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub(crate) fn note_derivation(&mut self, dependency: &FunctionalDependency, source: DependencySource) {
        if let Some(callback) = &mut self.callback_derivation {
            callback(dependency, source)
        }
    }
}
