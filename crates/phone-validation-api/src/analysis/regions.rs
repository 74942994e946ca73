//! English region names and IANA timezones keyed by ISO 3166-1 alpha-2 code.
//!
//! Timezones are listed per region, not per number prefix, so numbers in
//! regions spanning several zones report all of them.

/// A region the analyzer can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub time_zones: &'static [&'static str],
}

impl Region {
    const fn new(
        code: &'static str,
        name: &'static str,
        time_zones: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            name,
            time_zones,
        }
    }
}

/// Look up a region by its alpha-2 code (case-sensitive, upper case).
pub fn lookup(code: &str) -> Option<&'static Region> {
    REGIONS
        .binary_search_by(|r| r.code.cmp(code))
        .ok()
        .map(|idx| &REGIONS[idx])
}

// Sorted by code for binary search.
static REGIONS: &[Region] = &[
    Region::new("AC", "Ascension Island", &["Atlantic/St_Helena"]),
    Region::new("AD", "Andorra", &["Europe/Andorra"]),
    Region::new("AE", "United Arab Emirates", &["Asia/Dubai"]),
    Region::new("AF", "Afghanistan", &["Asia/Kabul"]),
    Region::new("AG", "Antigua and Barbuda", &["America/Antigua"]),
    Region::new("AI", "Anguilla", &["America/Anguilla"]),
    Region::new("AL", "Albania", &["Europe/Tirane"]),
    Region::new("AM", "Armenia", &["Asia/Yerevan"]),
    Region::new("AO", "Angola", &["Africa/Luanda"]),
    Region::new(
        "AQ",
        "Antarctica",
        &[
            "Antarctica/McMurdo",
            "Antarctica/Casey",
            "Antarctica/Davis",
            "Antarctica/DumontDUrville",
            "Antarctica/Mawson",
            "Antarctica/Palmer",
            "Antarctica/Rothera",
            "Antarctica/Syowa",
            "Antarctica/Troll",
            "Antarctica/Vostok",
        ],
    ),
    Region::new(
        "AR",
        "Argentina",
        &[
            "America/Argentina/Buenos_Aires",
            "America/Argentina/Cordoba",
            "America/Argentina/Salta",
            "America/Argentina/Jujuy",
            "America/Argentina/Tucuman",
            "America/Argentina/Catamarca",
            "America/Argentina/La_Rioja",
            "America/Argentina/San_Juan",
            "America/Argentina/Mendoza",
            "America/Argentina/San_Luis",
            "America/Argentina/Rio_Gallegos",
            "America/Argentina/Ushuaia",
        ],
    ),
    Region::new("AS", "American Samoa", &["Pacific/Pago_Pago"]),
    Region::new("AT", "Austria", &["Europe/Vienna"]),
    Region::new(
        "AU",
        "Australia",
        &[
            "Australia/Lord_Howe",
            "Antarctica/Macquarie",
            "Australia/Hobart",
            "Australia/Melbourne",
            "Australia/Sydney",
            "Australia/Broken_Hill",
            "Australia/Brisbane",
            "Australia/Lindeman",
            "Australia/Adelaide",
            "Australia/Darwin",
            "Australia/Perth",
            "Australia/Eucla",
        ],
    ),
    Region::new("AW", "Aruba", &["America/Aruba"]),
    Region::new("AX", "Åland Islands", &["Europe/Mariehamn"]),
    Region::new("AZ", "Azerbaijan", &["Asia/Baku"]),
    Region::new("BA", "Bosnia and Herzegovina", &["Europe/Sarajevo"]),
    Region::new("BB", "Barbados", &["America/Barbados"]),
    Region::new("BD", "Bangladesh", &["Asia/Dhaka"]),
    Region::new("BE", "Belgium", &["Europe/Brussels"]),
    Region::new("BF", "Burkina Faso", &["Africa/Ouagadougou"]),
    Region::new("BG", "Bulgaria", &["Europe/Sofia"]),
    Region::new("BH", "Bahrain", &["Asia/Bahrain"]),
    Region::new("BI", "Burundi", &["Africa/Bujumbura"]),
    Region::new("BJ", "Benin", &["Africa/Porto-Novo"]),
    Region::new("BL", "Saint Barthélemy", &["America/St_Barthelemy"]),
    Region::new("BM", "Bermuda", &["Atlantic/Bermuda"]),
    Region::new("BN", "Brunei", &["Asia/Brunei"]),
    Region::new("BO", "Bolivia", &["America/La_Paz"]),
    Region::new("BQ", "Caribbean Netherlands", &["America/Kralendijk"]),
    Region::new(
        "BR",
        "Brazil",
        &[
            "America/Noronha",
            "America/Belem",
            "America/Fortaleza",
            "America/Recife",
            "America/Araguaina",
            "America/Maceio",
            "America/Bahia",
            "America/Sao_Paulo",
            "America/Campo_Grande",
            "America/Cuiaba",
            "America/Santarem",
            "America/Porto_Velho",
            "America/Boa_Vista",
            "America/Manaus",
            "America/Eirunepe",
            "America/Rio_Branco",
        ],
    ),
    Region::new("BS", "Bahamas", &["America/Nassau"]),
    Region::new("BT", "Bhutan", &["Asia/Thimphu"]),
    Region::new("BV", "Bouvet Island", &[]),
    Region::new("BW", "Botswana", &["Africa/Gaborone"]),
    Region::new("BY", "Belarus", &["Europe/Minsk"]),
    Region::new("BZ", "Belize", &["America/Belize"]),
    Region::new(
        "CA",
        "Canada",
        &[
            "America/St_Johns",
            "America/Halifax",
            "America/Glace_Bay",
            "America/Moncton",
            "America/Goose_Bay",
            "America/Blanc-Sablon",
            "America/Toronto",
            "America/Iqaluit",
            "America/Atikokan",
            "America/Winnipeg",
            "America/Resolute",
            "America/Rankin_Inlet",
            "America/Regina",
            "America/Swift_Current",
            "America/Edmonton",
            "America/Cambridge_Bay",
            "America/Inuvik",
            "America/Creston",
            "America/Dawson_Creek",
            "America/Fort_Nelson",
            "America/Whitehorse",
            "America/Dawson",
            "America/Vancouver",
        ],
    ),
    Region::new("CC", "Cocos (Keeling) Islands", &["Indian/Cocos"]),
    Region::new("CD", "Congo (DRC)", &["Africa/Kinshasa", "Africa/Lubumbashi"]),
    Region::new("CF", "Central African Republic", &["Africa/Bangui"]),
    Region::new("CG", "Congo (Republic)", &["Africa/Brazzaville"]),
    Region::new("CH", "Switzerland", &["Europe/Zurich"]),
    Region::new("CI", "Côte d'Ivoire", &["Africa/Abidjan"]),
    Region::new("CK", "Cook Islands", &["Pacific/Rarotonga"]),
    Region::new(
        "CL",
        "Chile",
        &[
            "America/Santiago",
            "America/Coyhaique",
            "America/Punta_Arenas",
            "Pacific/Easter",
        ],
    ),
    Region::new("CM", "Cameroon", &["Africa/Douala"]),
    Region::new("CN", "China", &["Asia/Shanghai", "Asia/Urumqi"]),
    Region::new("CO", "Colombia", &["America/Bogota"]),
    Region::new("CR", "Costa Rica", &["America/Costa_Rica"]),
    Region::new("CU", "Cuba", &["America/Havana"]),
    Region::new("CV", "Cape Verde", &["Atlantic/Cape_Verde"]),
    Region::new("CW", "Curaçao", &["America/Curacao"]),
    Region::new("CX", "Christmas Island", &["Indian/Christmas"]),
    Region::new("CY", "Cyprus", &["Asia/Nicosia", "Asia/Famagusta"]),
    Region::new("CZ", "Czech Republic", &["Europe/Prague"]),
    Region::new("DE", "Germany", &["Europe/Berlin", "Europe/Busingen"]),
    Region::new("DJ", "Djibouti", &["Africa/Djibouti"]),
    Region::new("DK", "Denmark", &["Europe/Copenhagen"]),
    Region::new("DM", "Dominica", &["America/Dominica"]),
    Region::new("DO", "Dominican Republic", &["America/Santo_Domingo"]),
    Region::new("DZ", "Algeria", &["Africa/Algiers"]),
    Region::new("EC", "Ecuador", &["America/Guayaquil", "Pacific/Galapagos"]),
    Region::new("EE", "Estonia", &["Europe/Tallinn"]),
    Region::new("EG", "Egypt", &["Africa/Cairo"]),
    Region::new("EH", "Western Sahara", &["Africa/El_Aaiun"]),
    Region::new("ER", "Eritrea", &["Africa/Asmara"]),
    Region::new("ES", "Spain", &["Europe/Madrid", "Africa/Ceuta", "Atlantic/Canary"]),
    Region::new("ET", "Ethiopia", &["Africa/Addis_Ababa"]),
    Region::new("FI", "Finland", &["Europe/Helsinki"]),
    Region::new("FJ", "Fiji", &["Pacific/Fiji"]),
    Region::new("FK", "Falkland Islands", &["Atlantic/Stanley"]),
    Region::new("FM", "Micronesia", &["Pacific/Chuuk", "Pacific/Pohnpei", "Pacific/Kosrae"]),
    Region::new("FO", "Faroe Islands", &["Atlantic/Faroe"]),
    Region::new("FR", "France", &["Europe/Paris"]),
    Region::new("GA", "Gabon", &["Africa/Libreville"]),
    Region::new("GB", "United Kingdom", &["Europe/London"]),
    Region::new("GD", "Grenada", &["America/Grenada"]),
    Region::new("GE", "Georgia", &["Asia/Tbilisi"]),
    Region::new("GF", "French Guiana", &["America/Cayenne"]),
    Region::new("GG", "Guernsey", &["Europe/Guernsey"]),
    Region::new("GH", "Ghana", &["Africa/Accra"]),
    Region::new("GI", "Gibraltar", &["Europe/Gibraltar"]),
    Region::new(
        "GL",
        "Greenland",
        &[
            "America/Nuuk",
            "America/Danmarkshavn",
            "America/Scoresbysund",
            "America/Thule",
        ],
    ),
    Region::new("GM", "Gambia", &["Africa/Banjul"]),
    Region::new("GN", "Guinea", &["Africa/Conakry"]),
    Region::new("GP", "Guadeloupe", &["America/Guadeloupe"]),
    Region::new("GQ", "Equatorial Guinea", &["Africa/Malabo"]),
    Region::new("GR", "Greece", &["Europe/Athens"]),
    Region::new("GS", "South Georgia and the South Sandwich Islands", &["Atlantic/South_Georgia"]),
    Region::new("GT", "Guatemala", &["America/Guatemala"]),
    Region::new("GU", "Guam", &["Pacific/Guam"]),
    Region::new("GW", "Guinea-Bissau", &["Africa/Bissau"]),
    Region::new("GY", "Guyana", &["America/Guyana"]),
    Region::new("HK", "Hong Kong", &["Asia/Hong_Kong"]),
    Region::new("HM", "Heard Island and McDonald Islands", &[]),
    Region::new("HN", "Honduras", &["America/Tegucigalpa"]),
    Region::new("HR", "Croatia", &["Europe/Zagreb"]),
    Region::new("HT", "Haiti", &["America/Port-au-Prince"]),
    Region::new("HU", "Hungary", &["Europe/Budapest"]),
    Region::new(
        "ID",
        "Indonesia",
        &[
            "Asia/Jakarta",
            "Asia/Pontianak",
            "Asia/Makassar",
            "Asia/Jayapura",
        ],
    ),
    Region::new("IE", "Ireland", &["Europe/Dublin"]),
    Region::new("IL", "Israel", &["Asia/Jerusalem"]),
    Region::new("IM", "Isle of Man", &["Europe/Isle_of_Man"]),
    Region::new("IN", "India", &["Asia/Kolkata"]),
    Region::new("IO", "British Indian Ocean Territory", &["Indian/Chagos"]),
    Region::new("IQ", "Iraq", &["Asia/Baghdad"]),
    Region::new("IR", "Iran", &["Asia/Tehran"]),
    Region::new("IS", "Iceland", &["Atlantic/Reykjavik"]),
    Region::new("IT", "Italy", &["Europe/Rome"]),
    Region::new("JE", "Jersey", &["Europe/Jersey"]),
    Region::new("JM", "Jamaica", &["America/Jamaica"]),
    Region::new("JO", "Jordan", &["Asia/Amman"]),
    Region::new("JP", "Japan", &["Asia/Tokyo"]),
    Region::new("KE", "Kenya", &["Africa/Nairobi"]),
    Region::new("KG", "Kyrgyzstan", &["Asia/Bishkek"]),
    Region::new("KH", "Cambodia", &["Asia/Phnom_Penh"]),
    Region::new("KI", "Kiribati", &["Pacific/Tarawa", "Pacific/Kanton", "Pacific/Kiritimati"]),
    Region::new("KM", "Comoros", &["Indian/Comoro"]),
    Region::new("KN", "Saint Kitts and Nevis", &["America/St_Kitts"]),
    Region::new("KP", "North Korea", &["Asia/Pyongyang"]),
    Region::new("KR", "South Korea", &["Asia/Seoul"]),
    Region::new("KW", "Kuwait", &["Asia/Kuwait"]),
    Region::new("KY", "Cayman Islands", &["America/Cayman"]),
    Region::new(
        "KZ",
        "Kazakhstan",
        &[
            "Asia/Almaty",
            "Asia/Qyzylorda",
            "Asia/Qostanay",
            "Asia/Aqtobe",
            "Asia/Aqtau",
            "Asia/Atyrau",
            "Asia/Oral",
        ],
    ),
    Region::new("LA", "Laos", &["Asia/Vientiane"]),
    Region::new("LB", "Lebanon", &["Asia/Beirut"]),
    Region::new("LC", "Saint Lucia", &["America/St_Lucia"]),
    Region::new("LI", "Liechtenstein", &["Europe/Vaduz"]),
    Region::new("LK", "Sri Lanka", &["Asia/Colombo"]),
    Region::new("LR", "Liberia", &["Africa/Monrovia"]),
    Region::new("LS", "Lesotho", &["Africa/Maseru"]),
    Region::new("LT", "Lithuania", &["Europe/Vilnius"]),
    Region::new("LU", "Luxembourg", &["Europe/Luxembourg"]),
    Region::new("LV", "Latvia", &["Europe/Riga"]),
    Region::new("LY", "Libya", &["Africa/Tripoli"]),
    Region::new("MA", "Morocco", &["Africa/Casablanca"]),
    Region::new("MC", "Monaco", &["Europe/Monaco"]),
    Region::new("MD", "Moldova", &["Europe/Chisinau"]),
    Region::new("ME", "Montenegro", &["Europe/Podgorica"]),
    Region::new("MF", "Saint Martin", &["America/Marigot"]),
    Region::new("MG", "Madagascar", &["Indian/Antananarivo"]),
    Region::new("MH", "Marshall Islands", &["Pacific/Majuro", "Pacific/Kwajalein"]),
    Region::new("MK", "North Macedonia", &["Europe/Skopje"]),
    Region::new("ML", "Mali", &["Africa/Bamako"]),
    Region::new("MM", "Myanmar", &["Asia/Yangon"]),
    Region::new("MN", "Mongolia", &["Asia/Ulaanbaatar", "Asia/Hovd"]),
    Region::new("MO", "Macau", &["Asia/Macau"]),
    Region::new("MP", "Northern Mariana Islands", &["Pacific/Saipan"]),
    Region::new("MQ", "Martinique", &["America/Martinique"]),
    Region::new("MR", "Mauritania", &["Africa/Nouakchott"]),
    Region::new("MS", "Montserrat", &["America/Montserrat"]),
    Region::new("MT", "Malta", &["Europe/Malta"]),
    Region::new("MU", "Mauritius", &["Indian/Mauritius"]),
    Region::new("MV", "Maldives", &["Indian/Maldives"]),
    Region::new("MW", "Malawi", &["Africa/Blantyre"]),
    Region::new(
        "MX",
        "Mexico",
        &[
            "America/Mexico_City",
            "America/Cancun",
            "America/Merida",
            "America/Monterrey",
            "America/Matamoros",
            "America/Chihuahua",
            "America/Ciudad_Juarez",
            "America/Ojinaga",
            "America/Mazatlan",
            "America/Bahia_Banderas",
            "America/Hermosillo",
            "America/Tijuana",
        ],
    ),
    Region::new("MY", "Malaysia", &["Asia/Kuala_Lumpur", "Asia/Kuching"]),
    Region::new("MZ", "Mozambique", &["Africa/Maputo"]),
    Region::new("NA", "Namibia", &["Africa/Windhoek"]),
    Region::new("NC", "New Caledonia", &["Pacific/Noumea"]),
    Region::new("NE", "Niger", &["Africa/Niamey"]),
    Region::new("NF", "Norfolk Island", &["Pacific/Norfolk"]),
    Region::new("NG", "Nigeria", &["Africa/Lagos"]),
    Region::new("NI", "Nicaragua", &["America/Managua"]),
    Region::new("NL", "Netherlands", &["Europe/Amsterdam"]),
    Region::new("NO", "Norway", &["Europe/Oslo"]),
    Region::new("NP", "Nepal", &["Asia/Kathmandu"]),
    Region::new("NR", "Nauru", &["Pacific/Nauru"]),
    Region::new("NU", "Niue", &["Pacific/Niue"]),
    Region::new("NZ", "New Zealand", &["Pacific/Auckland", "Pacific/Chatham"]),
    Region::new("OM", "Oman", &["Asia/Muscat"]),
    Region::new("PA", "Panama", &["America/Panama"]),
    Region::new("PE", "Peru", &["America/Lima"]),
    Region::new(
        "PF",
        "French Polynesia",
        &[
            "Pacific/Tahiti",
            "Pacific/Marquesas",
            "Pacific/Gambier",
        ],
    ),
    Region::new("PG", "Papua New Guinea", &["Pacific/Port_Moresby", "Pacific/Bougainville"]),
    Region::new("PH", "Philippines", &["Asia/Manila"]),
    Region::new("PK", "Pakistan", &["Asia/Karachi"]),
    Region::new("PL", "Poland", &["Europe/Warsaw"]),
    Region::new("PM", "Saint Pierre and Miquelon", &["America/Miquelon"]),
    Region::new("PN", "Pitcairn Islands", &["Pacific/Pitcairn"]),
    Region::new("PR", "Puerto Rico", &["America/Puerto_Rico"]),
    Region::new("PS", "Palestine", &["Asia/Gaza", "Asia/Hebron"]),
    Region::new("PT", "Portugal", &["Europe/Lisbon", "Atlantic/Madeira", "Atlantic/Azores"]),
    Region::new("PW", "Palau", &["Pacific/Palau"]),
    Region::new("PY", "Paraguay", &["America/Asuncion"]),
    Region::new("QA", "Qatar", &["Asia/Qatar"]),
    Region::new("RE", "Réunion", &["Indian/Reunion"]),
    Region::new("RO", "Romania", &["Europe/Bucharest"]),
    Region::new("RS", "Serbia", &["Europe/Belgrade"]),
    Region::new(
        "RU",
        "Russia",
        &[
            "Europe/Kaliningrad",
            "Europe/Moscow",
            "Europe/Kirov",
            "Europe/Volgograd",
            "Europe/Astrakhan",
            "Europe/Saratov",
            "Europe/Ulyanovsk",
            "Europe/Samara",
            "Asia/Yekaterinburg",
            "Asia/Omsk",
            "Asia/Novosibirsk",
            "Asia/Barnaul",
            "Asia/Tomsk",
            "Asia/Novokuznetsk",
            "Asia/Krasnoyarsk",
            "Asia/Irkutsk",
            "Asia/Chita",
            "Asia/Yakutsk",
            "Asia/Khandyga",
            "Asia/Vladivostok",
            "Asia/Ust-Nera",
            "Asia/Magadan",
            "Asia/Sakhalin",
            "Asia/Srednekolymsk",
            "Asia/Kamchatka",
            "Asia/Anadyr",
        ],
    ),
    Region::new("RW", "Rwanda", &["Africa/Kigali"]),
    Region::new("SA", "Saudi Arabia", &["Asia/Riyadh"]),
    Region::new("SB", "Solomon Islands", &["Pacific/Guadalcanal"]),
    Region::new("SC", "Seychelles", &["Indian/Mahe"]),
    Region::new("SD", "Sudan", &["Africa/Khartoum"]),
    Region::new("SE", "Sweden", &["Europe/Stockholm"]),
    Region::new("SG", "Singapore", &["Asia/Singapore"]),
    Region::new("SH", "Saint Helena", &["Atlantic/St_Helena"]),
    Region::new("SI", "Slovenia", &["Europe/Ljubljana"]),
    Region::new("SJ", "Svalbard and Jan Mayen", &["Arctic/Longyearbyen"]),
    Region::new("SK", "Slovakia", &["Europe/Bratislava"]),
    Region::new("SL", "Sierra Leone", &["Africa/Freetown"]),
    Region::new("SM", "San Marino", &["Europe/San_Marino"]),
    Region::new("SN", "Senegal", &["Africa/Dakar"]),
    Region::new("SO", "Somalia", &["Africa/Mogadishu"]),
    Region::new("SR", "Suriname", &["America/Paramaribo"]),
    Region::new("SS", "South Sudan", &["Africa/Juba"]),
    Region::new("ST", "São Tomé and Príncipe", &["Africa/Sao_Tome"]),
    Region::new("SV", "El Salvador", &["America/El_Salvador"]),
    Region::new("SX", "Sint Maarten", &["America/Lower_Princes"]),
    Region::new("SY", "Syria", &["Asia/Damascus"]),
    Region::new("SZ", "Eswatini", &["Africa/Mbabane"]),
    Region::new("TA", "Tristan da Cunha", &["Atlantic/St_Helena"]),
    Region::new("TC", "Turks and Caicos Islands", &["America/Grand_Turk"]),
    Region::new("TD", "Chad", &["Africa/Ndjamena"]),
    Region::new("TF", "French Southern Territories", &["Indian/Kerguelen"]),
    Region::new("TG", "Togo", &["Africa/Lome"]),
    Region::new("TH", "Thailand", &["Asia/Bangkok"]),
    Region::new("TJ", "Tajikistan", &["Asia/Dushanbe"]),
    Region::new("TK", "Tokelau", &["Pacific/Fakaofo"]),
    Region::new("TL", "Timor-Leste", &["Asia/Dili"]),
    Region::new("TM", "Turkmenistan", &["Asia/Ashgabat"]),
    Region::new("TN", "Tunisia", &["Africa/Tunis"]),
    Region::new("TO", "Tonga", &["Pacific/Tongatapu"]),
    Region::new("TR", "Turkey", &["Europe/Istanbul"]),
    Region::new("TT", "Trinidad and Tobago", &["America/Port_of_Spain"]),
    Region::new("TV", "Tuvalu", &["Pacific/Funafuti"]),
    Region::new("TW", "Taiwan", &["Asia/Taipei"]),
    Region::new("TZ", "Tanzania", &["Africa/Dar_es_Salaam"]),
    Region::new("UA", "Ukraine", &["Europe/Simferopol", "Europe/Kyiv"]),
    Region::new("UG", "Uganda", &["Africa/Kampala"]),
    Region::new("UM", "U.S. Outlying Islands", &["Pacific/Midway", "Pacific/Wake"]),
    Region::new(
        "US",
        "United States",
        &[
            "America/New_York",
            "America/Detroit",
            "America/Kentucky/Louisville",
            "America/Kentucky/Monticello",
            "America/Indiana/Indianapolis",
            "America/Indiana/Vincennes",
            "America/Indiana/Winamac",
            "America/Indiana/Marengo",
            "America/Indiana/Petersburg",
            "America/Indiana/Vevay",
            "America/Chicago",
            "America/Indiana/Tell_City",
            "America/Indiana/Knox",
            "America/Menominee",
            "America/North_Dakota/Center",
            "America/North_Dakota/New_Salem",
            "America/North_Dakota/Beulah",
            "America/Denver",
            "America/Boise",
            "America/Phoenix",
            "America/Los_Angeles",
            "America/Anchorage",
            "America/Juneau",
            "America/Sitka",
            "America/Metlakatla",
            "America/Yakutat",
            "America/Nome",
            "America/Adak",
            "Pacific/Honolulu",
        ],
    ),
    Region::new("UY", "Uruguay", &["America/Montevideo"]),
    Region::new("UZ", "Uzbekistan", &["Asia/Samarkand", "Asia/Tashkent"]),
    Region::new("VA", "Vatican City", &["Europe/Vatican"]),
    Region::new("VC", "Saint Vincent and the Grenadines", &["America/St_Vincent"]),
    Region::new("VE", "Venezuela", &["America/Caracas"]),
    Region::new("VG", "British Virgin Islands", &["America/Tortola"]),
    Region::new("VI", "U.S. Virgin Islands", &["America/St_Thomas"]),
    Region::new("VN", "Vietnam", &["Asia/Ho_Chi_Minh"]),
    Region::new("VU", "Vanuatu", &["Pacific/Efate"]),
    Region::new("WF", "Wallis and Futuna", &["Pacific/Wallis"]),
    Region::new("WS", "Samoa", &["Pacific/Apia"]),
    Region::new("XK", "Kosovo", &["Europe/Belgrade"]),
    Region::new("YE", "Yemen", &["Asia/Aden"]),
    Region::new("YT", "Mayotte", &["Indian/Mayotte"]),
    Region::new("ZA", "South Africa", &["Africa/Johannesburg"]),
    Region::new("ZM", "Zambia", &["Africa/Lusaka"]),
    Region::new("ZW", "Zimbabwe", &["Africa/Harare"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(REGIONS.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_lookup_known_regions() {
        let ke = lookup("KE").unwrap();
        assert_eq!(ke.name, "Kenya");
        assert_eq!(ke.time_zones, &["Africa/Nairobi"]);

        assert_eq!(lookup("GB").unwrap().name, "United Kingdom");
        assert!(lookup("US").unwrap().time_zones.contains(&"America/New_York"));
    }

    #[test]
    fn test_names_are_spelled_out() {
        assert_eq!(lookup("TF").unwrap().name, "French Southern Territories");
        assert_eq!(lookup("UM").unwrap().name, "U.S. Outlying Islands");
        assert_eq!(lookup("BQ").unwrap().name, "Caribbean Netherlands");
        assert!(REGIONS.iter().all(|r| !r.name.contains(". ")));
    }

    #[test]
    fn test_lookup_unknown_region() {
        assert!(lookup("ZZ").is_none());
        assert!(lookup("ke").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_every_region_has_a_name() {
        assert!(REGIONS.iter().all(|r| !r.name.is_empty()));
    }
}
