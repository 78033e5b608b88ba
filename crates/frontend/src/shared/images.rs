//! Photo URLs used across the pages

macro_rules! asset {
    ($file:literal) => {
        concat!(
            "https://customer-assets.emergentagent.com/job_90af5f01-ade8-433a-b64b-3c2a14dec63c/artifacts/",
            $file
        )
    };
}

pub const HERO: &str = asset!("87x14u9a_Screenshot%202026-01-30%20134758.png");
pub const AERIAL: &str = asset!("lujrcf3u_Screenshot%202026-01-30%20135506.png");
pub const ROOM_SUITE: &str = asset!("krd9rdnq_Screenshot%202026-01-30%20134915.png");
pub const ROOM_LOUNGE: &str = asset!("5yhcklsi_Screenshot%202026-01-30%20134947.png");
pub const POOL: &str = asset!("ikclnp1k_Screenshot%202026-01-30%20134846.png");

pub const WEDDING: &str = "https://images.unsplash.com/photo-1766393524464-e5eb1b05e4c8?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjA1ODR8MHwxfHNlYXJjaHw0fHxsdXh1cnklMjBob3RlbCUyMHdlZGRpbmclMjByZWNlcHRpb24lMjBvdXRkb29yJTIwZWxlZ2FudHxlbnwwfHx8fDE3Njk3NjUyNjR8MA&ixlib=rb-4.1.0&q=85";
pub const WEDDING_RECEPTION: &str = "https://images.unsplash.com/photo-1766393195987-912865cbb81b?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjA1ODR8MHwxfHNlYXJjaHwxfHxsdXh1cnklMjBob3RlbCUyMHdlZGRpbmclMjByZWNlcHRpb24lMjBvdXRkb29yJTIwZWxlZ2FudHxlbnwwfHx8fDE3Njk3NjUyNjR8MA&ixlib=rb-4.1.0&q=85";
pub const SPA: &str = "https://images.unsplash.com/photo-1758973470049-4514352776eb?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzF8MHwxfHNlYXJjaHwyfHxsdXh1cnklMjBob3RlbCUyMHNwYSUyMG1hc3NhZ2UlMjByZWxheHxlbnwwfHx8fDE3Njk3NjUyNjl8MA&ixlib=rb-4.1.0&q=85";
pub const DINING: &str = "https://images.unsplash.com/photo-1673705988622-18d05a5cf293?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjAzMzJ8MHwxfHNlYXJjaHwxfHxnb3VybWV0JTIwZmluZSUyMGRpbmluZyUyMHBsYXRlJTIwbHV4dXJ5JTIwaG90ZWwlMjBmb29kfGVufDB8fHx8MTc2OTc2NTI4NHww&ixlib=rb-4.1.0&q=85";
pub const CORPORATE: &str = "https://images.pexels.com/photos/7534215/pexels-photo-7534215.jpeg";
pub const CONFERENCE: &str = "https://images.unsplash.com/photo-1768346564825-6f90c0b89e2e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w4NjAzMjd8MHwxfHNlYXJjaHwxfHxjb3Jwb3JhdGUlMjBjb25mZXJlbmNlJTIwcm9vbSUyMGx1eHVyeSUyMGhvdGVsJTIwbWVldGluZ3xlbnwwfHx8fDE3Njk3NjUyNjh8MA&ixlib=rb-4.1.0&q=85";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resort_photos_share_asset_host() {
        for url in [HERO, AERIAL, ROOM_SUITE, ROOM_LOUNGE, POOL] {
            assert!(url.starts_with("https://customer-assets.emergentagent.com/"), "{url}");
            assert!(url.ends_with(".png"));
        }
    }
}
