use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::User;

pub const DEMO_USER_1: Uuid = Uuid::from_u128(0x6f1c_2a4e_9d3b_4c8a_8e57_1b0f_3a2d_0001);
pub const DEMO_USER_2: Uuid = Uuid::from_u128(0x6f1c_2a4e_9d3b_4c8a_8e57_1b0f_3a2d_0002);

/// Sample users for demos.
pub fn demo_users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        User {
            id: DEMO_USER_1,
            rut: "12.345.678-5".to_string(),
            full_name: "Juan Pérez".to_string(),
            birth_date: "1990-05-15".to_string(),
            child_count: 2,
            email: "juan.perez@email.com".to_string(),
            phones: vec!["+56912345678".to_string()],
            addresses: vec!["Av. Las Condes 1234, Santiago".to_string()],
            created_at: now,
            updated_at: now,
        },
        User {
            id: DEMO_USER_2,
            rut: "98.765.432-5".to_string(),
            full_name: "María González".to_string(),
            birth_date: "1985-03-22".to_string(),
            child_count: 1,
            email: "maria.gonzalez@email.com".to_string(),
            phones: vec!["+56987654321".to_string(), "+56223456789".to_string()],
            addresses: vec![
                "Calle Principal 567, Valparaíso".to_string(),
                "Av. Libertad 890, Viña del Mar".to_string(),
            ],
            created_at: now,
            updated_at: now,
        },
    ]
}
