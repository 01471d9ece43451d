pub const NORMAL_TELEGRAM: &str = r"/ISk5\2ME382-1004

0-0:96.1.1(4B414C37303035313135383130323132)
1-0:1.8.1(00608.400*kWh)
1-0:1.8.2(00490.342*kWh)
1-0:2.8.1(00000.001*kWh)
1-0:2.8.2(00000.000*kWh)
0-0:96.14.0(0001)
1-0:1.7.0(0001.51*kW)
1-0:2.7.0(0000.00*kW)
0-0:17.0.0(0999.00*kW)
0-0:96.3.10(1)
0-0:96.13.1()
0-0:96.13.0()
0-1:24.1.0(3)
0-1:96.1.0(3238303131303031323332313337343132)
0-1:24.3.0(121030140000)(00)(60)(1)(0-1:24.2.1)(m3)
(00947.680)
0-1:24.4.0(1)
!";

pub const BROKEN_TELEGRAM: &str = r"ISk5\2ME382-1004

0-0:96.1.1 4B414C37303035313135383130323132
1-0:1.8.1(00608.400kWh)
1-0:1.8.2(0049x.342*kWh)
1-0:2.8.1(00000.001*kW h)
1-0:2.8.2(00000.000)
0-0:96.14.0(000a)
1-0:1.7.0(0001.51*kW)
1-0:2.7.0(0000.00*kW)
0-0:17.0.0(0999.00*kW)
0-0:96.3.10(1)
0-0:96.13.1()
0-0:96.13.0()
0-1:24.1.0(3)
0-1:96.1.0(3238303131303031323332313337343132)
0-1:24.3.0(121030140000)(00)(60)(1)(0-1:24.2.1)(m3)
(00947.680)
0-1:24.4.0(1)
!";

pub const KAIFA_TELEGRAM: &str = r"/KFM5KAIFA-METER

1-3:0.2.8(42)
0-0:1.0.0(160315151406S)
0-0:96.1.1(XXXXXXXXXXXXXXMYSERIALXXXXXXXXXXXXXX)
1-0:1.8.1(000498.215*kWh)
1-0:1.8.2(000550.159*kWh)
1-0:2.8.1(000000.001*kWh)
1-0:2.8.2(000000.000*kWh)
0-0:96.14.0(0002)
1-0:1.7.0(00.235*kW)
1-0:2.7.0(00.000*kW)
0-0:96.7.21(00000)
0-0:96.7.9(00000)
1-0:99.97.0(0)(0-0:96.7.19)
1-0:32.32.0(00000)
1-0:32.36.0(00000)
0-0:96.13.1()
0-0:96.13.0()
1-0:31.7.0(001*A)
1-0:21.7.0(00.235*kW)
1-0:22.7.0(00.000*kW)
0-1:24.1.0(003)
0-1:96.1.0(4730303235303033333337343136333136)
0-1:24.2.1(160315150000S)(00323.528*m3)
!2D8E";

pub const LANDIS_GYR_TELEGRAM: &str = r"/XMX5LGBBFFB231158062

1-3:0.2.8(40)
0-0:1.0.0(170108161107W)
0-0:96.1.1(XXXXXXXXSERIALXXXXXXXXXXX)
1-0:1.8.1(004018.859*kWh)
1-0:1.8.2(002827.154*kWh)
1-0:2.8.1(000000.002*kWh)
1-0:2.8.2(000000.000*kWh)
0-0:96.14.0(0001)
1-0:1.7.0(00.341*kW)
1-0:2.7.0(00.000*kW)
0-0:96.7.21(00004)
0-0:96.7.9(00003)
1-0:99.97.0(0)(0-0:96.7.19)
1-0:32.32.0(00000)
1-0:32.36.0(00000)
0-0:96.13.1()
0-0:96.13.0()
1-0:31.7.0(001*A)
1-0:21.7.0(00.341*kW)
1-0:22.7.0(00.000*kW)
0-1:24.1.0(003)
0-1:96.1.0(4730303233353631323139373231393134)
0-1:24.3.0(170108160000)(00)(60)(1)(0-1:24.2.1)(m3)
(05290.211)
!0A2F";

/// DSMR 2.2 telegram with a `1003` header, 14 lines.
pub const SHORT_TELEGRAM: &str = r"/ISk5\2MT382-1003

0-0:96.1.1(5A424556303035313135383130323132)
1-0:1.8.1(00185.000*kWh)
1-0:1.8.2(00084.000*kWh)
1-0:2.8.1(00013.000*kWh)
1-0:2.8.2(00019.000*kWh)
0-0:96.14.0(0001)
1-0:1.7.0(0000.98*kW)
1-0:2.7.0(0000.00*kW)
0-0:17.0.0(0999.00*kW)
0-0:96.3.10(1)
0-0:96.13.1()
!";
