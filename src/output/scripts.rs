//! Static script boilerplate written around the generated route lines.

pub const LINUX_UP_HEADER: &str = r#"#!/bin/bash
export PATH="/bin:/sbin:/usr/sbin:/usr/bin"

OLDGW=$(ip route show | grep '^default' | sed -e 's/default via \([^ ]*\).*/\1/')

if [ -z "$OLDGW" ]; then
    exit 0
fi

if [ ! -e /tmp/vpn_oldgw ]; then
    echo $OLDGW > /tmp/vpn_oldgw
fi

"#;

pub const LINUX_DOWN_HEADER: &str = r#"#!/bin/bash
export PATH="/bin:/sbin:/usr/sbin:/usr/bin"

OLDGW=$(cat /tmp/vpn_oldgw)

"#;

pub const LINUX_DOWN_FOOTER: &str = "rm /tmp/vpn_oldgw\n";

pub const MAC_UP_HEADER: &str = r#"#!/bin/sh
export PATH="/bin:/sbin:/usr/sbin:/usr/bin"

OLDGW=$(netstat -nr | grep '^default' | grep -v 'ppp' | sed 's/default *\([0-9\.]*\) .*/\1/' | awk '{if($1){print $1}}')

if [ ! -e /tmp/pptp_oldgw ]; then
    echo "${OLDGW}" > /tmp/pptp_oldgw
fi

dscacheutil -flushcache

route add 10.0.0.0/8 "${OLDGW}"
route add 172.16.0.0/12 "${OLDGW}"
route add 192.168.0.0/16 "${OLDGW}"

"#;

pub const MAC_DOWN_HEADER: &str = r#"#!/bin/sh
export PATH="/bin:/sbin:/usr/sbin:/usr/bin"

if [ ! -e /tmp/pptp_oldgw ]; then
        exit 0
fi

OLDGW=$(cat /tmp/pptp_oldgw)

route delete 10.0.0.0/8 "${OLDGW}"
route delete 172.16.0.0/12 "${OLDGW}"
route delete 192.168.0.0/16 "${OLDGW}"
"#;

pub const MAC_DOWN_FOOTER: &str = "\n\nrm /tmp/pptp_oldgw\n";

pub const WIN_UP_HEADER: &str = concat!(
    r#"for /F "tokens=3" %%* in ('route print ^| findstr "\<0.0.0.0\>"') do set "gw=%%*""#,
    "\n",
    "ipconfig /flushdns\n\n",
);

pub const WIN_DOWN_HEADER: &str = "@echo off\n";

pub const ANDROID_UP_HEADER: &str = r#"#!/bin/sh
alias netstat='/system/xbin/busybox netstat'
alias grep='/system/xbin/busybox grep'
alias awk='/system/xbin/busybox awk'
alias route='/system/xbin/busybox route'

OLDGW=$(netstat -rn | grep ^0\.0\.0\.0 | awk '{print $2}')

"#;

pub const ANDROID_DOWN_HEADER: &str = r#"#!/bin/sh
alias route='/system/xbin/busybox route'

"#;
