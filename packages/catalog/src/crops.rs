use crate::{CropMetadata, OptimalRange};

/// Returned for any crop name without a dedicated record.
pub static DEFAULT_CROP: CropMetadata = CropMetadata {
    icon: "🌱",
    season: "varies",
    water_requirement: "medium",
    growth_period: "varies",
    optimal_temp: OptimalRange::new(20, 30),
    optimal_humidity: OptimalRange::new(60, 80),
    benefits: &["Agricultural crop", "Market available"],
    description: "Agricultural crop suitable for farming.",
};

pub(crate) static CROPS: &[(&str, CropMetadata)] = &[
    (
        "rice",
        CropMetadata {
            icon: "🌾",
            season: "monsoon",
            water_requirement: "very_high",
            growth_period: "90-120 days",
            optimal_temp: OptimalRange::new(20, 35),
            optimal_humidity: OptimalRange::new(80, 95),
            benefits: &["Staple food crop", "High yield", "MSP guarantee"],
            description: "Traditional paddy crop requiring flood irrigation.",
        },
    ),
    (
        "maize",
        CropMetadata {
            icon: "🌽",
            season: "summer",
            water_requirement: "medium",
            growth_period: "60-90 days",
            optimal_temp: OptimalRange::new(18, 27),
            optimal_humidity: OptimalRange::new(55, 75),
            benefits: &["Versatile crop", "Good market demand", "Drought resistant"],
            description: "Versatile cereal crop suitable for various climates.",
        },
    ),
    (
        "chickpea",
        CropMetadata {
            icon: "🫘",
            season: "winter",
            water_requirement: "low",
            growth_period: "100-120 days",
            optimal_temp: OptimalRange::new(17, 21),
            optimal_humidity: OptimalRange::new(14, 20),
            benefits: &["High protein", "Nitrogen fixing", "Premium prices"],
            description: "Protein-rich legume with excellent market value.",
        },
    ),
    (
        "kidneybeans",
        CropMetadata {
            icon: "🫘",
            season: "winter",
            water_requirement: "medium",
            growth_period: "90-110 days",
            optimal_temp: OptimalRange::new(15, 25),
            optimal_humidity: OptimalRange::new(18, 25),
            benefits: &["High nutrition", "Good yield", "Export potential"],
            description: "Nutritious legume with good export opportunities.",
        },
    ),
    (
        "pigeonpeas",
        CropMetadata {
            icon: "🫛",
            season: "monsoon",
            water_requirement: "medium",
            growth_period: "120-180 days",
            optimal_temp: OptimalRange::new(18, 37),
            optimal_humidity: OptimalRange::new(30, 70),
            benefits: &["Drought tolerant", "Soil enriching", "Multiple uses"],
            description: "Versatile pulse crop suitable for dry regions.",
        },
    ),
    (
        "mothbeans",
        CropMetadata {
            icon: "🫘",
            season: "summer",
            water_requirement: "low",
            growth_period: "70-90 days",
            optimal_temp: OptimalRange::new(24, 32),
            optimal_humidity: OptimalRange::new(40, 65),
            benefits: &["Drought resistant", "Short duration", "Nutritious"],
            description: "Drought-resistant legume ideal for arid regions.",
        },
    ),
    (
        "mungbean",
        CropMetadata {
            icon: "🫛",
            season: "summer",
            water_requirement: "medium",
            growth_period: "60-75 days",
            optimal_temp: OptimalRange::new(27, 30),
            optimal_humidity: OptimalRange::new(80, 90),
            benefits: &["Short duration", "High protein", "Easy to digest"],
            description: "Fast-growing pulse with excellent nutritional value.",
        },
    ),
    (
        "blackgram",
        CropMetadata {
            icon: "⚫",
            season: "summer/winter",
            water_requirement: "medium",
            growth_period: "75-90 days",
            optimal_temp: OptimalRange::new(25, 35),
            optimal_humidity: OptimalRange::new(60, 70),
            benefits: &["High protein", "Multiple cropping", "Good prices"],
            description: "Protein-rich pulse suitable for multiple seasons.",
        },
    ),
    (
        "lentil",
        CropMetadata {
            icon: "🫘",
            season: "winter",
            water_requirement: "low",
            growth_period: "110-130 days",
            optimal_temp: OptimalRange::new(18, 30),
            optimal_humidity: OptimalRange::new(60, 70),
            benefits: &["High protein", "Good prices", "Export quality"],
            description: "Premium pulse crop with excellent export potential.",
        },
    ),
    (
        "pomegranate",
        CropMetadata {
            icon: "🍎",
            season: "all season",
            water_requirement: "medium",
            growth_period: "180-240 days",
            optimal_temp: OptimalRange::new(18, 25),
            optimal_humidity: OptimalRange::new(85, 95),
            benefits: &["High value", "Export demand", "Medicinal properties"],
            description: "Premium fruit with excellent health benefits.",
        },
    ),
    (
        "banana",
        CropMetadata {
            icon: "🍌",
            season: "all season",
            water_requirement: "high",
            growth_period: "300-365 days",
            optimal_temp: OptimalRange::new(25, 30),
            optimal_humidity: OptimalRange::new(75, 85),
            benefits: &["Year-round production", "High demand", "Good returns"],
            description: "Tropical fruit crop with consistent market demand.",
        },
    ),
    (
        "mango",
        CropMetadata {
            icon: "🥭",
            season: "summer",
            water_requirement: "medium",
            growth_period: "100-150 days",
            optimal_temp: OptimalRange::new(27, 36),
            optimal_humidity: OptimalRange::new(45, 55),
            benefits: &["King of fruits", "Export quality", "Premium prices"],
            description: "Premium tropical fruit with excellent market value.",
        },
    ),
    (
        "grapes",
        CropMetadata {
            icon: "🍇",
            season: "summer/winter",
            water_requirement: "medium",
            growth_period: "150-180 days",
            optimal_temp: OptimalRange::new(9, 42),
            optimal_humidity: OptimalRange::new(80, 84),
            benefits: &["High value", "Wine production", "Export potential"],
            description: "Premium fruit with multiple commercial uses.",
        },
    ),
    (
        "watermelon",
        CropMetadata {
            icon: "🍉",
            season: "summer",
            water_requirement: "high",
            growth_period: "70-100 days",
            optimal_temp: OptimalRange::new(24, 27),
            optimal_humidity: OptimalRange::new(80, 90),
            benefits: &["High yield", "Short duration", "Good market"],
            description: "Refreshing summer fruit with quick returns.",
        },
    ),
    (
        "muskmelon",
        CropMetadata {
            icon: "🍈",
            season: "summer",
            water_requirement: "medium",
            growth_period: "80-100 days",
            optimal_temp: OptimalRange::new(27, 30),
            optimal_humidity: OptimalRange::new(90, 95),
            benefits: &["Premium prices", "Aromatic", "Export quality"],
            description: "Sweet aromatic fruit with good market value.",
        },
    ),
    (
        "apple",
        CropMetadata {
            icon: "🍎",
            season: "winter",
            water_requirement: "medium",
            growth_period: "150-180 days",
            optimal_temp: OptimalRange::new(21, 24),
            optimal_humidity: OptimalRange::new(90, 95),
            benefits: &["High value", "Health benefits", "Premium market"],
            description: "Premium temperate fruit with excellent health benefits.",
        },
    ),
    (
        "orange",
        CropMetadata {
            icon: "🍊",
            season: "winter",
            water_requirement: "medium",
            growth_period: "240-300 days",
            optimal_temp: OptimalRange::new(10, 35),
            optimal_humidity: OptimalRange::new(90, 95),
            benefits: &["Vitamin C rich", "Long shelf life", "Good prices"],
            description: "Citrus fruit with excellent nutritional value.",
        },
    ),
    (
        "papaya",
        CropMetadata {
            icon: "🍈",
            season: "all season",
            water_requirement: "medium",
            growth_period: "270-365 days",
            optimal_temp: OptimalRange::new(23, 44),
            optimal_humidity: OptimalRange::new(90, 95),
            benefits: &["Fast growing", "Medicinal value", "Good yield"],
            description: "Tropical fruit with medicinal properties.",
        },
    ),
    (
        "coconut",
        CropMetadata {
            icon: "🥥",
            season: "all season",
            water_requirement: "medium",
            growth_period: "365+ days",
            optimal_temp: OptimalRange::new(25, 30),
            optimal_humidity: OptimalRange::new(90, 100),
            benefits: &["Multiple products", "Sustainable income", "Long-term crop"],
            description: "Multi-purpose crop with diverse commercial applications.",
        },
    ),
    (
        "cotton",
        CropMetadata {
            icon: "☁️",
            season: "summer",
            water_requirement: "medium",
            growth_period: "150-180 days",
            optimal_temp: OptimalRange::new(22, 26),
            optimal_humidity: OptimalRange::new(75, 85),
            benefits: &["Cash crop", "Textile industry", "MSP support"],
            description: "Major cash crop with government support.",
        },
    ),
    (
        "jute",
        CropMetadata {
            icon: "🌿",
            season: "monsoon",
            water_requirement: "high",
            growth_period: "120-150 days",
            optimal_temp: OptimalRange::new(23, 27),
            optimal_humidity: OptimalRange::new(70, 90),
            benefits: &["Fiber crop", "Eco-friendly", "Good market"],
            description: "Natural fiber crop with sustainable applications.",
        },
    ),
    (
        "coffee",
        CropMetadata {
            icon: "☕",
            season: "monsoon",
            water_requirement: "medium",
            growth_period: "180-240 days",
            optimal_temp: OptimalRange::new(23, 28),
            optimal_humidity: OptimalRange::new(50, 70),
            benefits: &["Export crop", "Premium prices", "Aromatic"],
            description: "Premium plantation crop with excellent export value.",
        },
    ),
];
