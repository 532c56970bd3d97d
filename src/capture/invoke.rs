//! Calling a callable with its positional arguments packed in a tuple.
//!
//! [`Invoke`] is implemented for every `FnOnce` of up to sixteen arguments, so
//! the capture adapters take one `args` tuple instead of one entry point per
//! arity.

/// A callable that can be invoked with an argument tuple.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::Invoke;
///
/// let add = |a: i32, b: i32| a + b;
/// assert_eq!(add.invoke((2, 3)), 5);
///
/// let answer = || 42;
/// assert_eq!(answer.invoke(()), 42);
/// ```
pub trait Invoke<Args> {
    /// The callable's return type.
    type Output;

    /// Calls `self` with the arguments unpacked from `args`.
    fn invoke(self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Invoke<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A1);
impl_invoke!(A1, A2);
impl_invoke!(A1, A2, A3);
impl_invoke!(A1, A2, A3, A4);
impl_invoke!(A1, A2, A3, A4, A5);
impl_invoke!(A1, A2, A3, A4, A5, A6);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16);
