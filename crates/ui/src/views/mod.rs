mod matrix;
mod practice;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use matrix::MatrixGrid;
pub use practice::PracticeView;
