pub mod clock;

pub mod lookup;

pub mod pipeline;

pub mod record;

pub mod validator;
