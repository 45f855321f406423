use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are signed primitive integers, e.g. alignment scores that can go below zero
pub trait PrimSInt: PrimInt + ::num::Signed {}

impl<T: PrimInt + ::num::Signed> PrimSInt for T {}
