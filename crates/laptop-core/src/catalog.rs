//! Enumerated domains a specification profile may draw from.

/// Brands offered by the recommendation form
pub const BRANDS: &[&str] = &["Acer", "ASUS", "Lenovo", "HP", "MSI", "Apple", "Dell"];

/// CPU tiers
pub const CPUS: &[&str] = &[
    "Intel i5",
    "Intel i7",
    "Intel i9",
    "AMD Ryzen 5",
    "AMD Ryzen 7",
    "Apple M1/M2",
];

/// GPU options, including the integrated fallback
pub const GPUS: &[&str] = &[
    "Integrated",
    "NVIDIA GTX 1650",
    "NVIDIA RTX 3050",
    "NVIDIA RTX 3060",
    "NVIDIA RTX 4060",
];

/// RAM sizes in GB. 64 stands for "64 GB or more".
pub const RAM_OPTIONS: &[u32] = &[4, 8, 16, 32, 64];

/// Storage sizes in GB. 1024 stands for "1 TB".
pub const STORAGE_OPTIONS: &[u32] = &[256, 512, 1024];

pub fn is_brand(value: &str) -> bool {
    BRANDS.contains(&value)
}

pub fn is_cpu(value: &str) -> bool {
    CPUS.contains(&value)
}

pub fn is_gpu(value: &str) -> bool {
    GPUS.contains(&value)
}

pub fn is_ram(value: u32) -> bool {
    RAM_OPTIONS.contains(&value)
}

pub fn is_storage(value: u32) -> bool {
    STORAGE_OPTIONS.contains(&value)
}

/// Human label for a RAM option ("16 GB", "64 GB+")
pub fn ram_label(gb: u32) -> String {
    if gb >= 64 {
        "64 GB+".to_string()
    } else {
        format!("{} GB", gb)
    }
}

/// Human label for a storage option ("512 GB", "1 TB")
pub fn storage_label(gb: u32) -> String {
    if gb == 1024 {
        "1 TB".to_string()
    } else {
        format!("{} GB", gb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(is_brand("ASUS"));
        assert!(!is_brand("asus"));
        assert!(is_cpu("Apple M1/M2"));
        assert!(is_gpu("Integrated"));
        assert!(is_ram(64));
        assert!(!is_ram(12));
        assert!(is_storage(1024));
        assert!(!is_storage(1000));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ram_label(16), "16 GB");
        assert_eq!(ram_label(64), "64 GB+");
        assert_eq!(storage_label(512), "512 GB");
        assert_eq!(storage_label(1024), "1 TB");
    }
}
