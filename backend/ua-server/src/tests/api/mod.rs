mod user_dto;
mod user_id;
