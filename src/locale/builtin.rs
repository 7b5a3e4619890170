//! Built-in decision-table rows for the storefront languages.
//!
//! Date patterns are regular expressions over the localized date text.

use crate::locale::table::LanguageSpec;

/// Compile-time form of a [`LanguageSpec`].
pub(crate) struct BuiltinRow {
    pub code: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub default: Option<&'static str>,
    pub date_pattern: &'static str,
    pub decimal: &'static str,
    pub thousand: &'static str,
    pub keywords: &'static [&'static str],
}

impl BuiltinRow {
    pub fn to_spec(&self) -> LanguageSpec {
        LanguageSpec {
            code: self.code.to_string(),
            language_name: self.name.to_string(),
            primary_currency: self.primary.to_string(),
            secondary_currency: self.secondary.to_string(),
            default_currency: self.default.map(str::to_string),
            date_pattern: self.date_pattern.to_string(),
            decimal_separator: self.decimal.to_string(),
            thousand_separator: self.thousand.to_string(),
            expected_keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

const DMY_SLASH: &str = r"\d{1,2}/\d{1,2}/\d{2,4}";
const DMY_DOT: &str = r"\d{1,2}\.\d{1,2}\.\d{2,4}";
const DMY_DASH: &str = r"\d{1,2}-\d{1,2}-\d{2,4}";
const YMD_DASH: &str = r"\d{4}-\d{1,2}-\d{1,2}";

pub(crate) const BUILTIN_LANGUAGES: &[BuiltinRow] = &[
    BuiltinRow {
        code: "ko",
        name: "한국어",
        primary: "₩",
        secondary: "원",
        default: Some("€"),
        date_pattern: r"\d{4}[/.-]\d{1,2}[/.-]\d{1,2}",
        decimal: ",",
        thousand: ".",
        keywords: &["장바구니에 담기", "홈", "의류", "액세서리", "검색", "로그인", "장바구니"],
    },
    BuiltinRow {
        code: "bs",
        name: "Bosanski",
        primary: "KM",
        secondary: "BAM",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Dodaj u korpu", "Početna", "Odjeća", "Dodaci", "Pretraga", "Prijava", "Korpa"],
    },
    BuiltinRow {
        code: "ca",
        name: "Català",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Afegir al carret", "Inici", "Roba", "Accessoris", "Cercar", "Iniciar sessió", "Carret"],
    },
    BuiltinRow {
        code: "da",
        name: "Dansk",
        primary: "kr",
        secondary: "DKK",
        default: Some("€"),
        date_pattern: DMY_DASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Læg i kurv", "Hjem", "Tøj", "Tilbehør", "Søg", "Log ind", "Kurv"],
    },
    BuiltinRow {
        code: "de",
        name: "Deutsch",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["In den Warenkorb", "Startseite", "Kleidung", "Zubehör", "Suchen", "Anmelden", "Warenkorb"],
    },
    BuiltinRow {
        code: "en",
        name: "English",
        primary: "$",
        secondary: "£",
        default: None,
        date_pattern: DMY_SLASH,
        decimal: ".",
        thousand: ",",
        keywords: &["Add to cart", "Home", "Clothes", "Accessories", "Search", "Sign in", "Cart"],
    },
    BuiltinRow {
        code: "es",
        name: "Español",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Añadir al carrito", "Inicio", "Ropa", "Accesorios", "Buscar", "Iniciar sesión", "Carrito"],
    },
    BuiltinRow {
        code: "mx",
        name: "Español MX",
        primary: "$",
        secondary: "MXN",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ".",
        thousand: ",",
        keywords: &["Añadir al carrito", "Inicio", "Ropa", "Accesorios", "Buscar", "Iniciar sesión", "Carrito"],
    },
    BuiltinRow {
        code: "et",
        name: "Eesti keel",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Lisa korvi", "Avaleht", "Riided", "Aksessuaarid", "Otsi", "Logi sisse", "Korv"],
    },
    BuiltinRow {
        code: "fr",
        name: "Français",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: " ",
        keywords: &["Ajouter au panier", "Accueil", "Vêtements", "Accessoires", "Rechercher", "Connexion", "Panier"],
    },
    BuiltinRow {
        code: "qc",
        name: "Français CA",
        primary: "$",
        secondary: "CAD",
        default: Some("€"),
        date_pattern: YMD_DASH,
        decimal: ",",
        thousand: " ",
        keywords: &["Ajouter au panier", "Accueil", "Vêtements", "Accessoires", "Rechercher", "Connexion", "Panier"],
    },
    BuiltinRow {
        code: "gl",
        name: "Galego",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Engadir ao carro", "Inicio", "Roupa", "Accesorios", "Buscar", "Iniciar sesión", "Carro"],
    },
    BuiltinRow {
        code: "hr",
        name: "Hrvatski",
        primary: "€",
        secondary: "kn",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Dodaj u košaricu", "Početna", "Odjeća", "Dodaci", "Traži", "Prijava", "Košarica"],
    },
    BuiltinRow {
        code: "id",
        name: "Indonesia",
        primary: "Rp",
        secondary: "IDR",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Tambah ke keranjang", "Beranda", "Pakaian", "Aksesoris", "Cari", "Masuk", "Keranjang"],
    },
    BuiltinRow {
        code: "it",
        name: "Italiano",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Aggiungi al carrello", "Home", "Abbigliamento", "Accessori", "Cerca", "Accedi", "Carrello"],
    },
    BuiltinRow {
        code: "lv",
        name: "Latviešu",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Pievienot grozam", "Sākums", "Apģērbs", "Aksesuāri", "Meklēt", "Pieslēgties", "Grozs"],
    },
    BuiltinRow {
        code: "hu",
        name: "Magyar",
        primary: "Ft",
        secondary: "HUF",
        default: Some("€"),
        date_pattern: r"\d{4}\.\d{1,2}\.\d{1,2}",
        decimal: ",",
        thousand: " ",
        keywords: &["Kosárba", "Főoldal", "Ruházat", "Kiegészítők", "Keresés", "Bejelentkezés", "Kosár"],
    },
    BuiltinRow {
        code: "nl",
        name: "Nederlands",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DASH,
        decimal: ",",
        thousand: ".",
        keywords: &["In winkelwagen", "Home", "Kleding", "Accessoires", "Zoeken", "Inloggen", "Winkelwagen"],
    },
    BuiltinRow {
        code: "no",
        name: "Norsk",
        primary: "kr",
        secondary: "NOK",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Legg i handlekurv", "Hjem", "Klær", "Tilbehør", "Søk", "Logg inn", "Handlekurv"],
    },
    BuiltinRow {
        code: "pl",
        name: "Polski",
        primary: "zł",
        secondary: "PLN",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Dodaj do koszyka", "Strona główna", "Ubrania", "Akcesoria", "Szukaj", "Zaloguj się", "Koszyk"],
    },
    BuiltinRow {
        code: "pt",
        name: "Português",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Adicionar ao carrinho", "Início", "Roupas", "Acessórios", "Pesquisar", "Entrar", "Carrinho"],
    },
    BuiltinRow {
        code: "br",
        name: "Português BR",
        primary: "R$",
        secondary: "BRL",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Adicionar ao carrinho", "Início", "Roupas", "Acessórios", "Pesquisar", "Entrar", "Carrinho"],
    },
    BuiltinRow {
        code: "ro",
        name: "Română",
        primary: "lei",
        secondary: "RON",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Adaugă în coș", "Acasă", "Îmbrăcăminte", "Accesorii", "Căutare", "Autentificare", "Coș"],
    },
    BuiltinRow {
        code: "sq",
        name: "Shqip",
        primary: "L",
        secondary: "ALL",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Shto në shportë", "Ballina", "Veshje", "Aksesorë", "Kërko", "Hyr", "Shporta"],
    },
    BuiltinRow {
        code: "sk",
        name: "Slovenčina",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Pridať do košíka", "Domov", "Oblečenie", "Doplnky", "Hľadať", "Prihlásiť sa", "Košík"],
    },
    BuiltinRow {
        code: "sr",
        name: "Srpski",
        primary: "RSD",
        secondary: "дин",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Dodaj u korpu", "Početna", "Odeća", "Dodaci", "Pretraga", "Prijava", "Korpa"],
    },
    BuiltinRow {
        code: "fi",
        name: "Suomi",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Lisää ostoskoriin", "Etusivu", "Vaatteet", "Asusteet", "Haku", "Kirjaudu", "Ostoskori"],
    },
    BuiltinRow {
        code: "sv",
        name: "Svenska",
        primary: "kr",
        secondary: "SEK",
        default: Some("€"),
        date_pattern: YMD_DASH,
        decimal: ",",
        thousand: " ",
        keywords: &["Lägg i kundvagn", "Hem", "Kläder", "Tillbehör", "Sök", "Logga in", "Kundvagn"],
    },
    BuiltinRow {
        code: "tr",
        name: "Türkçe",
        primary: "₺",
        secondary: "TL",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Sepete ekle", "Ana Sayfa", "Giyim", "Aksesuar", "Ara", "Giriş yap", "Sepet"],
    },
    BuiltinRow {
        code: "lt",
        name: "Lietuvių",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: YMD_DASH,
        decimal: ",",
        thousand: " ",
        keywords: &["Į krepšelį", "Pradžia", "Drabužiai", "Aksesuarai", "Ieškoti", "Prisijungti", "Krepšelis"],
    },
    BuiltinRow {
        code: "sl",
        name: "Slovenščina",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Dodaj v košarico", "Domov", "Oblačila", "Dodatki", "Išči", "Prijava", "Košarica"],
    },
    BuiltinRow {
        code: "vi",
        name: "Tiếng Việt",
        primary: "₫",
        secondary: "đ",
        default: Some("VND"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Thêm vào giỏ", "Trang chủ", "Quần áo", "Phụ kiện", "Tìm kiếm", "Đăng nhập", "Giỏ hàng"],
    },
    BuiltinRow {
        code: "cs",
        name: "Čeština",
        primary: "Kč",
        secondary: "CZK",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Přidat do košíku", "Domů", "Oblečení", "Doplňky", "Hledat", "Přihlásit se", "Košík"],
    },
    BuiltinRow {
        code: "el",
        name: "Ελληνικά",
        primary: "€",
        secondary: "€",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ",",
        thousand: ".",
        keywords: &["Προσθήκη στο καλάθι", "Αρχική", "Ρούχα", "Αξεσουάρ", "Αναζήτηση", "Σύνδεση", "Καλάθι"],
    },
    BuiltinRow {
        code: "uk",
        name: "Українська",
        primary: "₴",
        secondary: "грн",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Додати до кошика", "Головна", "Одяг", "Аксесуари", "Пошук", "Увійти", "Кошик"],
    },
    BuiltinRow {
        code: "ru",
        name: "Русский",
        primary: "₽",
        secondary: "руб",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["В корзину", "Главная", "Одежда", "Аксессуары", "Поиск", "Войти", "Корзина"],
    },
    BuiltinRow {
        code: "bg",
        name: "Български",
        primary: "лв",
        secondary: "BGN",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: " ",
        keywords: &["Добави в кошницата", "Начало", "Дрехи", "Аксесоари", "Търсене", "Вход", "Кошница"],
    },
    BuiltinRow {
        code: "mk",
        name: "Македонски",
        primary: "ден",
        secondary: "MKD",
        default: Some("€"),
        date_pattern: DMY_DOT,
        decimal: ",",
        thousand: ".",
        keywords: &["Додај во кошничка", "Почетна", "Облека", "Додатоци", "Барај", "Најава", "Кошничка"],
    },
    BuiltinRow {
        code: "he",
        name: "עברית",
        primary: "₪",
        secondary: "ש״ח",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ".",
        thousand: ",",
        keywords: &["הוסף לסל", "דף הבית", "בגדים", "אביזרים", "חיפוש", "התחברות", "סל קניות"],
    },
    BuiltinRow {
        code: "fa",
        name: "فارسی",
        primary: "﷼",
        secondary: "ریال",
        default: Some("€"),
        date_pattern: r"\d{4}/\d{1,2}/\d{1,2}",
        decimal: ".",
        thousand: ",",
        keywords: &["افزودن به سبد", "خانه", "لباس", "لوازم جانبی", "جستجو", "ورود", "سبد خرید"],
    },
    BuiltinRow {
        code: "hi",
        name: "हिन्दी",
        primary: "₹",
        secondary: "रु",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ".",
        thousand: ",",
        keywords: &["कार्ट में जोड़ें", "होम", "कपड़े", "सहायक उपकरण", "खोजें", "लॉग इन", "कार्ट"],
    },
    BuiltinRow {
        code: "bn",
        name: "বাংলা",
        primary: "৳",
        secondary: "টাকা",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ".",
        thousand: ",",
        keywords: &["কার্টে যোগ করুন", "হোম", "পোশাক", "আনুষাঙ্গিক", "অনুসন্ধান", "লগইন", "কার্ট"],
    },
    BuiltinRow {
        code: "ar",
        name: "العربية",
        primary: "د.إ",
        secondary: "ر.س",
        default: Some("€"),
        date_pattern: DMY_SLASH,
        decimal: ".",
        thousand: ",",
        keywords: &["أضف إلى السلة", "الرئيسية", "ملابس", "إكسسوارات", "بحث", "تسجيل الدخول", "السلة"],
    },
    BuiltinRow {
        code: "ja",
        name: "日本語",
        primary: "¥",
        secondary: "円",
        default: Some("€"),
        date_pattern: r"\d{4}[/年]\d{1,2}[/月]\d{1,2}",
        decimal: ".",
        thousand: ",",
        keywords: &["カートに入れる", "ホーム", "服", "アクセサリー", "検索", "ログイン", "カート"],
    },
    BuiltinRow {
        code: "zh",
        name: "简体中文",
        primary: "¥",
        secondary: "元",
        default: Some("€"),
        date_pattern: r"\d{4}[/年-]\d{1,2}[/月-]\d{1,2}",
        decimal: ".",
        thousand: ",",
        keywords: &["加入购物车", "首页", "服装", "配饰", "搜索", "登录", "购物车"],
    },
    BuiltinRow {
        code: "tw",
        name: "繁體中文",
        primary: "NT$",
        secondary: "$",
        default: Some("€"),
        date_pattern: r"\d{4}[/年-]\d{1,2}[/月-]\d{1,2}",
        decimal: ".",
        thousand: ",",
        keywords: &["加入購物車", "首頁", "服飾", "配件", "搜尋", "登入", "購物車"],
    },
];
