use std::{convert::Infallible, marker::PhantomData};

/// A callable model that maps an input to an output.
///
/// Solvers evaluate the function under study through this trait, so the same
/// solver drives a parsed [`Formula`](crate::Formula), a closure, or any
/// user-defined type.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

impl<M: Model + ?Sized> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

/// A model backed by an infallible function.
///
/// Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnModel<F, I, O> {
    function: F,
    _marker: PhantomData<fn(&I) -> O>,
}

/// Wraps a function as a [`Model`].
///
/// ```
/// use stepwise_core::{Model, from_fn};
///
/// let square = from_fn(|x: &f64| x * x);
/// assert_eq!(square.call(&3.0), Ok(9.0));
/// ```
pub fn from_fn<F, I, O>(function: F) -> FnModel<F, I, O>
where
    F: Fn(&I) -> O,
{
    FnModel {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O> Model for FnModel<F, I, O>
where
    F: Fn(&I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.function)(input))
    }
}
