pub mod guide;

pub type CmdResult<T> = cmdguide::Result<(T, i32)>;
