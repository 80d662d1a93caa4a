use uuid::Uuid;

pub fn generate_uuid() -> String {
    let new_uuid = Uuid::new_v4().simple().to_string();

    new_uuid
}
