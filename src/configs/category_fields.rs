// classifieds/src/configs/category_fields.rs
//
// Built-in field tables. Registry order is vehicles, then properties.

use crate::models::{CategoryFieldConfig, CustomField, FieldKind, FieldOption, FieldTable};

/// Newest model year offered in the vehicle year selector.
pub const LATEST_MODEL_YEAR: i32 = 2025;
const MODEL_YEAR_SPAN: i32 = 35;

pub const MAX_PRICE: f64 = 999_999_999.0;

fn opts(entries: &[(&str, &str, &str)]) -> Vec<FieldOption> {
    entries
        .iter()
        .map(|(value, label, label_ar)| FieldOption::new(*value, *label, *label_ar))
        .collect()
}

fn select(name: &str, label: &str, label_ar: &str, entries: &[(&str, &str, &str)]) -> CustomField {
    CustomField::new(name, label, label_ar, FieldKind::Select).options(opts(entries))
}

fn checkbox(name: &str, label: &str, label_ar: &str) -> CustomField {
    CustomField::new(name, label, label_ar, FieldKind::Checkbox)
}

fn model_years() -> Vec<FieldOption> {
    (0..MODEL_YEAR_SPAN)
        .map(|offset| {
            let year = (LATEST_MODEL_YEAR - offset).to_string();
            FieldOption::new(year.clone(), year.clone(), year)
        })
        .collect()
}

pub fn vehicle_fields_config() -> CategoryFieldConfig {
    CategoryFieldConfig {
        category_slug: "vehicles".to_string(),
        category_matches: ["vehicles", "cars", "cars-for-sale", "motorcycles", "auto-accessories"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        main_fields: vec![
            select("make", "Brand / Make", "الشركة المصنعة", &[
                ("toyota", "Toyota", "تويوتا"),
                ("honda", "Honda", "هوندا"),
                ("bmw", "BMW", "بي إم دبليو"),
                ("mercedes", "Mercedes-Benz", "مرسيدس بنز"),
                ("audi", "Audi", "أودي"),
                ("nissan", "Nissan", "نيسان"),
                ("hyundai", "Hyundai", "هيونداي"),
                ("kia", "Kia", "كيا"),
                ("ford", "Ford", "فورد"),
                ("chevrolet", "Chevrolet", "شيفروليه"),
                ("volkswagen", "Volkswagen", "فولكس واجن"),
                ("lexus", "Lexus", "لكزس"),
                ("porsche", "Porsche", "بورشه"),
                ("land_rover", "Land Rover", "لاند روفر"),
                ("jeep", "Jeep", "جيب"),
                ("other", "Other", "أخرى"),
            ])
            .required(),
            CustomField::new("model", "Model", "الموديل", FieldKind::Text)
                .required()
                .placeholder("e.g. Camry, Civic, 320i", "مثال: كامري، سيفيك"),
            CustomField::new("year", "Year", "سنة الصنع", FieldKind::Select)
                .options(model_years())
                .required(),
            select("condition", "Condition", "الحالة", &[
                ("new", "New", "جديد"),
                ("used", "Used", "مستعمل"),
            ])
            .required(),
            CustomField::new("kilometers", "Kilometers", "عدد الكيلومترات", FieldKind::Number)
                .required()
                .placeholder("e.g. 50000", "مثال: 50000")
                .bounds(0.0, 1_000_000.0),
            select("fuelType", "Fuel Type", "نوع الوقود", &[
                ("petrol", "Petrol", "بنزين"),
                ("diesel", "Diesel", "ديزل"),
                ("hybrid", "Hybrid", "هايبرد"),
                ("electric", "Electric", "كهربائي"),
                ("lpg", "LPG", "غاز"),
            ])
            .required(),
            select("transmission", "Transmission", "ناقل الحركة", &[
                ("automatic", "Automatic", "أوتوماتيك"),
                ("manual", "Manual", "عادي"),
            ])
            .required(),
        ],
        details_table: Some(FieldTable::new(
            "Vehicle Details",
            "تفاصيل السيارة",
            vec![
                select("color", "Color", "اللون", &[
                    ("white", "White", "أبيض"),
                    ("black", "Black", "أسود"),
                    ("silver", "Silver", "فضي"),
                    ("gray", "Gray", "رمادي"),
                    ("red", "Red", "أحمر"),
                    ("blue", "Blue", "أزرق"),
                    ("brown", "Brown", "بني"),
                    ("green", "Green", "أخضر"),
                    ("other", "Other", "أخرى"),
                ]),
                select("doors", "Number of Doors", "عدد الأبواب", &[
                    ("2", "2 Doors", "بابين"),
                    ("3", "3 Doors", "3 أبواب"),
                    ("4", "4 Doors", "4 أبواب"),
                    ("5", "5 Doors", "5 أبواب"),
                ]),
                select("seats", "Number of Seats", "عدد المقاعد", &[
                    ("2", "2 Seats", "مقعدين"),
                    ("4", "4 Seats", "4 مقاعد"),
                    ("5", "5 Seats", "5 مقاعد"),
                    ("7", "7 Seats", "7 مقاعد"),
                    ("8+", "8+ Seats", "8+ مقاعد"),
                ]),
                select("owners", "Number of Previous Owners", "عدد المالكين السابقين", &[
                    ("0", "First Owner", "المالك الأول"),
                    ("1", "1 Previous Owner", "مالك سابق واحد"),
                    ("2", "2 Previous Owners", "مالكين سابقين"),
                    ("3+", "3+ Previous Owners", "3+ مالكين"),
                ]),
                select("source", "Source / Origin", "المصدر", &[
                    ("gcc", "GCC Specs", "خليجي"),
                    ("american", "American Specs", "أمريكي"),
                    ("european", "European Specs", "أوروبي"),
                    ("japanese", "Japanese Specs", "ياباني"),
                    ("korean", "Korean Specs", "كوري"),
                    ("other", "Other", "أخرى"),
                ]),
                select("interior", "Interior Material", "المقصورة الداخلية", &[
                    ("leather", "Leather", "جلد"),
                    ("fabric", "Fabric", "قماش"),
                    ("synthetic", "Synthetic Leather", "جلد صناعي"),
                    ("mixed", "Mixed", "مختلط"),
                ]),
                select("carType", "Car Type", "نوع السيارة", &[
                    ("sedan", "Sedan", "سيدان"),
                    ("suv", "SUV", "دفع رباعي"),
                    ("hatchback", "Hatchback", "هاتشباك"),
                    ("coupe", "Coupe", "كوبيه"),
                    ("convertible", "Convertible", "مكشوفة"),
                    ("pickup", "Pickup", "بيك أب"),
                    ("van", "Van", "فان"),
                    ("wagon", "Wagon", "ستيشن"),
                ]),
                select("sellerType", "Seller Type", "نوع البائع", &[
                    ("owner", "Owner", "المالك"),
                    ("dealer", "Dealer", "معرض"),
                ]),
                select("paymentOptions", "Payment Options", "خيارات الدفع", &[
                    ("cash", "Cash Only", "كاش فقط"),
                    ("installments", "Installments Available", "تقسيط متاح"),
                    ("exchange", "Exchange Possible", "تبديل ممكن"),
                    ("negotiable", "Negotiable", "قابل للتفاوض"),
                ]),
            ],
        )),
        amenities_table: None,
    }
}

pub fn property_fields_config() -> CategoryFieldConfig {
    CategoryFieldConfig {
        category_slug: "properties".to_string(),
        category_matches: [
            "properties",
            "properties-for-sale",
            "apartments-villas-for-sale",
            "apartments-villas-for-rent",
            "commercials-for-sale",
            "commercials-for-rent",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        main_fields: vec![
            CustomField::new("size", "Size (m²)", "المساحة (م²)", FieldKind::Number)
                .required()
                .placeholder("e.g. 150", "مثال: 150")
                .bounds(1.0, 100_000.0),
            select("bedrooms", "Bedrooms", "غرف النوم", &[
                ("studio", "Studio", "ستوديو"),
                ("1", "1 Bedroom", "غرفة واحدة"),
                ("2", "2 Bedrooms", "غرفتين"),
                ("3", "3 Bedrooms", "3 غرف"),
                ("4", "4 Bedrooms", "4 غرف"),
                ("5", "5 Bedrooms", "5 غرف"),
                ("6+", "6+ Bedrooms", "6+ غرف"),
            ])
            .required(),
            select("bathrooms", "Bathrooms", "الحمامات", &[
                ("1", "1 Bathroom", "حمام واحد"),
                ("2", "2 Bathrooms", "حمامين"),
                ("3", "3 Bathrooms", "3 حمامات"),
                ("4", "4 Bathrooms", "4 حمامات"),
                ("5+", "5+ Bathrooms", "5+ حمامات"),
            ])
            .required(),
            select("furnished", "Furnishing", "التأثيث", &[
                ("furnished", "Furnished", "مفروش"),
                ("semi-furnished", "Semi-Furnished", "نصف مفروش"),
                ("unfurnished", "Unfurnished", "غير مفروش"),
            ])
            .required(),
            select("ownership", "Listed By", "مدرج بواسطة", &[
                ("owner", "By Owner", "المالك"),
                ("agent", "By Agent", "وكيل عقاري"),
                ("company", "By Company", "شركة عقارية"),
            ])
            .required(),
            select("floor", "Floor", "الطابق", &[
                ("ground", "Ground Floor", "الطابق الأرضي"),
                ("1", "1st Floor", "الطابق الأول"),
                ("2", "2nd Floor", "الطابق الثاني"),
                ("3", "3rd Floor", "الطابق الثالث"),
                ("4", "4th Floor", "الطابق الرابع"),
                ("5+", "5th Floor or Higher", "الطابق الخامس أو أعلى"),
                ("penthouse", "Penthouse", "بنتهاوس"),
            ]),
        ],
        details_table: None,
        amenities_table: Some(FieldTable::new(
            "Amenities",
            "المرافق والخدمات",
            vec![
                checkbox("balcony", "Balcony", "شرفة"),
                checkbox("elevator", "Elevator", "مصعد"),
                checkbox("storageRoom", "Storage Room", "غرفة تخزين"),
                checkbox("electricity24", "24/7 Electricity", "كهرباء 24/7"),
                checkbox("coveredParking", "Covered Parking", "موقف مغطى"),
                checkbox("centralAC", "Central A/C", "تكييف مركزي"),
                checkbox("security", "24/7 Security", "حراسة أمنية"),
                checkbox("gym", "Gym / Fitness Center", "صالة رياضية"),
                checkbox("pool", "Swimming Pool", "مسبح"),
                checkbox("garden", "Garden / Terrace", "حديقة / تراس"),
                checkbox("maidRoom", "Maid's Room", "غرفة خادمة"),
                checkbox("concierge", "Concierge Service", "خدمة الكونسيرج"),
                checkbox("petsAllowed", "Pets Allowed", "يُسمح بالحيوانات"),
                checkbox("seaView", "Sea View", "إطلالة بحرية"),
                checkbox("mountainView", "Mountain View", "إطلالة جبلية"),
                checkbox("generator", "Generator", "مولد كهربائي"),
            ],
        )),
    }
}

/// Fields every listing form carries regardless of category.
pub fn basic_info_fields() -> Vec<CustomField> {
    vec![
        CustomField::new("title", "Ad title", "عنوان الإعلان", FieldKind::Text)
            .required()
            .placeholder("e.g. 2020 Toyota Camry in excellent condition", "مثال: تويوتا كامري 2020 بحالة ممتازة"),
        CustomField::new("description", "Description", "الوصف", FieldKind::Textarea)
            .required()
            .placeholder("Describe what you are selling", "صف ما تبيعه"),
        CustomField::new("price", "Price (USD)", "السعر (دولار)", FieldKind::Number)
            .placeholder("e.g. 15000", "مثال: 15000")
            .bounds(0.0, MAX_PRICE),
        checkbox("isNegotiable", "Price is negotiable", "السعر قابل للتفاوض"),
    ]
}

/// Maximum number of photos one listing accepts.
pub const MAX_IMAGES: usize = 8;

pub fn media_fields() -> Vec<CustomField> {
    vec![CustomField::new("videoUrl", "Video URL", "رابط الفيديو", FieldKind::Text)
        .placeholder("e.g. https://www.youtube.com/watch?v=...", "مثال: https://www.youtube.com/watch?v=...")]
}

pub fn location_fields() -> Vec<CustomField> {
    vec![
        select("location", "City", "المدينة", &[
            ("beirut", "Beirut", "بيروت"),
            ("tripoli", "Tripoli", "طرابلس"),
            ("sidon", "Sidon", "صيدا"),
            ("tyre", "Tyre", "صور"),
            ("jounieh", "Jounieh", "جونيه"),
            ("byblos", "Byblos", "جبيل"),
            ("zahle", "Zahle", "زحلة"),
            ("baalbek", "Baalbek", "بعلبك"),
            ("nabatieh", "Nabatieh", "النبطية"),
            ("aley", "Aley", "عاليه"),
            ("batroun", "Batroun", "البترون"),
            ("broummana", "Broummana", "برمانا"),
            ("dbayeh", "Dbayeh", "ضبية"),
            ("achrafieh", "Achrafieh", "الأشرفية"),
            ("hamra", "Hamra", "الحمرا"),
            ("verdun", "Verdun", "فردان"),
            ("sin-el-fil", "Sin el Fil", "سن الفيل"),
            ("dekwaneh", "Dekwaneh", "الدكوانة"),
            ("mount-lebanon", "Mount Lebanon", "جبل لبنان"),
            ("other", "Other", "أخرى"),
        ]),
        CustomField::new("address", "Address", "العنوان", FieldKind::Text)
            .placeholder("Street, building, floor", "الشارع، المبنى، الطابق"),
    ]
}

pub fn contact_fields() -> Vec<CustomField> {
    vec![
        CustomField::new("contactName", "Name", "الاسم", FieldKind::Text),
        CustomField::new("contactPhone", "Phone number", "رقم الهاتف", FieldKind::Text)
            .placeholder("e.g. +961 3 123 456", "مثال: 456 123 3 961+"),
        checkbox("showPhone", "Show my phone number in the ad", "إظهار رقم هاتفي في الإعلان"),
    ]
}

/// Names of the fixed fields; family fields must not reuse them.
pub fn reserved_field_names() -> Vec<String> {
    basic_info_fields()
        .into_iter()
        .chain(media_fields())
        .chain(location_fields())
        .chain(contact_fields())
        .map(|f| f.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_years_descend_from_latest() {
        let config = vehicle_fields_config();
        let year = config.main_fields.iter().find(|f| f.name == "year").unwrap();
        assert_eq!(year.options.len(), 35);
        assert_eq!(year.options[0].value, "2025");
        assert_eq!(year.options[34].value, "1991");
    }

    #[test]
    fn test_amenities_are_optional_checkboxes() {
        let config = property_fields_config();
        let amenities = config.amenities_table.unwrap();
        assert_eq!(amenities.fields.len(), 16);
        assert!(amenities.fields.iter().all(|f| f.kind == FieldKind::Checkbox && !f.required));
    }

    #[test]
    fn test_reserved_names_cover_basic_info() {
        let reserved = reserved_field_names();
        for name in ["title", "description", "price", "videoUrl", "location", "contactPhone"] {
            assert!(reserved.iter().any(|r| r == name), "missing {}", name);
        }
    }
}
