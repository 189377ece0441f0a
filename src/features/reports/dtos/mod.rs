mod report_dto;

pub use report_dto::{CreateTrashDto, TrashEntryDto, TrashFieldsDto};
