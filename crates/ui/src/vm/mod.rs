mod practice_vm;

pub use practice_vm::{
    AnswerCellVm, INVERSE_MESSAGE, NOT_INVERSE_MESSAGE, PracticeVm, map_practice,
};
